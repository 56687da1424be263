//! Text layouts for [`SoraniDate`].

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAY_NAME_SEPARATOR, SHORT_SEPARATOR};
use crate::convert::SoraniDate;
use crate::prelude::*;

/// Output layout for [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum FormatStyle {
    /// `{day name}، {day} {month name} {year}`
    #[default]
    #[display(fmt = "full")]
    Full,
    /// `{day} {month name} {year}`
    #[display(fmt = "date")]
    Date,
    /// `{day}/{month}/{year}`, numeric month
    #[display(fmt = "short")]
    Short,
}

/// Unknown names select [`FormatStyle::Date`] rather than failing.
impl FromStr for FormatStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let style = if trimmed.eq_ignore_ascii_case("full") {
            Self::Full
        } else if trimmed.eq_ignore_ascii_case("short") {
            Self::Short
        } else {
            Self::Date
        };
        Ok(style)
    }
}

impl Serialize for FormatStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FormatStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Renders a Sorani date as text.
pub fn format(date: &SoraniDate, style: FormatStyle) -> String {
    match style {
        FormatStyle::Full => format!(
            "{}{DAY_NAME_SEPARATOR} {} {} {}",
            date.day_name(),
            date.day(),
            date.month_name(),
            date.year()
        ),
        FormatStyle::Date => format!("{} {} {}", date.day(), date.month_name(), date.year()),
        FormatStyle::Short => format!(
            "{}{SHORT_SEPARATOR}{}{SHORT_SEPARATOR}{}",
            date.day(),
            date.month(),
            date.year()
        ),
    }
}
