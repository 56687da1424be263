//! Gregorian to Sorani Kurdish calendar conversion.
//!
//! ```
//! use sorani_calendar::{convert, FormatStyle};
//!
//! let date = convert("2024-03-21").unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (2724, 1, 2));
//! assert_eq!(date.format(FormatStyle::Short), "2/1/2724");
//! ```

mod consts;
mod convert;
mod format;
mod names;
mod prelude;
mod types;

pub use consts::{DAYS_IN_MONTH, KURDISH_YEAR_OFFSET};
pub use convert::{SoraniDate, convert, today};
pub use format::{FormatStyle, format};
pub use names::{DAY_NAMES, MONTH_NAMES, day_name, day_names, month_name, month_names};
pub use types::{DateInput, GregorianDate, is_leap_year};

/// Error type for conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Text input is not a date chrono can read.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
}
