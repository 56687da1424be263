use crate::ConvertError;
use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

/// Layout accepted for a date and time separated by a space
const SPACE_SEPARATED_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Words that resolve to the current local date when given as text
const NOW_WORDS: [&str; 2] = ["now", "today"];

/// A Gregorian calendar date together with its weekday.
///
/// Built from a [`NaiveDate`], so the components are always a real date;
/// the weekday is derived, never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
    weekday: u8,
}

impl GregorianDate {
    /// Creates a date from its components, or `None` if chrono rejects them
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).map(Self::from)
    }

    /// The current date in the local timezone
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the weekday, 0 = Sunday through 6 = Saturday
    #[inline]
    pub const fn weekday(self) -> u8 {
        self.weekday
    }
}

impl From<NaiveDate> for GregorianDate {
    #[allow(clippy::cast_possible_truncation)]
    fn from(date: NaiveDate) -> Self {
        // chrono keeps month in 1..=12, day in 1..=31 and weekday in 0..=6
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
            weekday: date.weekday().num_days_from_sunday() as u8,
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// What [`convert`](crate::convert()) accepts: a date, text to parse, or nothing
/// (meaning today).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateInput<'a> {
    /// The current local date, read when the input is resolved
    #[default]
    Today,
    /// An already structured date
    Date(GregorianDate),
    /// Text in one of the ISO 8601 shapes chrono parses
    Text(&'a str),
}

impl DateInput<'_> {
    /// Resolves the input into a concrete date.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidDateFormat` if text input cannot be parsed.
    pub fn resolve(self) -> Result<GregorianDate, ConvertError> {
        match self {
            Self::Today => Ok(GregorianDate::today()),
            Self::Date(date) => Ok(date),
            Self::Text(text) => parse_date(text),
        }
    }
}

fn parse_date(text: &str) -> Result<GregorianDate, ConvertError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || NOW_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
        return Ok(GregorianDate::today());
    }

    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Ok(date.into());
    }
    if let Ok(datetime) = trimmed.parse::<NaiveDateTime>() {
        return Ok(datetime.date().into());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, SPACE_SEPARATED_DATETIME) {
        return Ok(datetime.date().into());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive().into());
    }

    tracing::debug!(input = text, "text is not a recognised date");
    Err(ConvertError::InvalidDateFormat(text.to_owned()))
}

impl From<GregorianDate> for DateInput<'_> {
    fn from(date: GregorianDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date.into())
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Date(datetime.date().into())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::Date(datetime.date_naive().into())
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Today, Into::into)
    }
}

// Helper functions

/// Gregorian leap-year rule.
///
/// Exposed as a utility; the conversion arithmetic does not use it.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}
