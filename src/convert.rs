//! Gregorian to Sorani Kurdish conversion.
//!
//! The arithmetic is the classic Gregorian to Jalali day-count reduction
//! (33-year, 4-year and 1-year cycles) with the resulting solar year moved
//! onto Kurdish year numbering.

use serde::Serialize;
use std::fmt;

use crate::ConvertError;
use crate::consts::{
    DAYS_IN_MONTH, DAYS_PER_33_YEARS, DAYS_PER_4_YEARS, DAYS_PER_YEAR, EARLY_EPOCH_GREGORIAN,
    FEBRUARY, KURDISH_YEAR_OFFSET, LATE_EPOCH_GREGORIAN, LATE_EPOCH_SOLAR, MAX_MONTH,
    NEW_YEAR_OFFSET, SECOND_HALF_START,
};
use crate::format::FormatStyle;
use crate::names::{day_name, month_name};
use crate::types::{DateInput, GregorianDate};

/// Length of each of the first six months
const LONG_MONTH_DAYS: i64 = 31;
/// Length of months seven onward
const SHORT_MONTH_DAYS: i64 = 30;

/// A date in the Sorani Kurdish calendar with its Sorani month and weekday names.
///
/// `month_name` always matches `month` and `day_name` always matches the weekday
/// of the Gregorian date it came from, so the fields are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoraniDate {
    day:        i32,
    month:      i32,
    year:       i32,
    month_name: &'static str,
    day_name:   &'static str,
}

impl SoraniDate {
    /// Converts a Gregorian date
    pub fn from_gregorian(date: GregorianDate) -> Self {
        let (year, month, day) = gregorian_to_sorani(date.year(), date.month(), date.day());
        Self {
            day,
            month,
            year,
            month_name: month_name(month),
            day_name: day_name(u32::from(date.weekday())),
        }
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Returns the month number (1-12)
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the Sorani Kurdish year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the Sorani month name
    #[inline]
    pub const fn month_name(&self) -> &'static str {
        self.month_name
    }

    /// Returns the Sorani weekday name
    #[inline]
    pub const fn day_name(&self) -> &'static str {
        self.day_name
    }

    /// Returns (year, month, day)
    pub const fn to_columns(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Renders the date in the given layout
    pub fn format(&self, style: FormatStyle) -> String {
        crate::format::format(self, style)
    }
}

impl From<GregorianDate> for SoraniDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl fmt::Display for SoraniDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatStyle::Full))
    }
}

/// Converts a date, text, or nothing (today) to the Sorani calendar.
///
/// # Errors
/// Returns `ConvertError::InvalidDateFormat` if text input cannot be parsed.
#[tracing::instrument(level = "trace", skip_all)]
pub fn convert<'a>(input: impl Into<DateInput<'a>>) -> Result<SoraniDate, ConvertError> {
    let date = input.into().resolve()?;
    Ok(SoraniDate::from_gregorian(date))
}

/// Today's local date in the Sorani calendar
pub fn today() -> SoraniDate {
    SoraniDate::from_gregorian(GregorianDate::today())
}

/// Maps a Gregorian (year, month, day) to a Sorani (year, month, day).
///
/// `/` steps are floor divisions and `%` steps keep the sign of the dividend;
/// the two only disagree for years before 621, where the mix is kept as is.
fn gregorian_to_sorani(year: i32, month: u8, day: u8) -> (i32, i32, i32) {
    let gy = i64::from(year);
    let (mut sy, gy) = if gy > LATE_EPOCH_GREGORIAN {
        (LATE_EPOCH_SOLAR, gy - LATE_EPOCH_GREGORIAN)
    } else {
        (0, gy - EARLY_EPOCH_GREGORIAN)
    };

    let gy2 = if month > FEBRUARY { gy + 1 } else { gy };

    let month_offset: i64 = DAYS_IN_MONTH
        .iter()
        .take(usize::from(month.min(MAX_MONTH)))
        .map(|&d| i64::from(d))
        .sum();

    let mut days = 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        - NEW_YEAR_OFFSET
        + i64::from(day)
        + month_offset;

    sy += 33 * days.div_euclid(DAYS_PER_33_YEARS);
    days %= DAYS_PER_33_YEARS;

    sy += 4 * days.div_euclid(DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    sy += (days - 1).div_euclid(DAYS_PER_YEAR);
    if days > DAYS_PER_YEAR {
        days = (days - 1) % DAYS_PER_YEAR;
    }

    let (sm, sd) = if days < SECOND_HALF_START {
        (1 + days.div_euclid(LONG_MONTH_DAYS), 1 + days % LONG_MONTH_DAYS)
    } else {
        let rest = days - SECOND_HALF_START;
        (7 + rest.div_euclid(SHORT_MONTH_DAYS), 1 + rest % SHORT_MONTH_DAYS)
    };

    sy += KURDISH_YEAR_OFFSET;

    if !(1..=i64::from(MAX_MONTH)).contains(&sm) {
        tracing::debug!(year, month, day, sorani_month = sm, "month outside 1-12");
    }
    tracing::trace!(year, month, day, sy, sm, sd, "converted");

    (narrow(sy), narrow(sm), narrow(sd))
}

// Every intermediate is bounded by the year span chrono can represent
#[allow(clippy::cast_possible_truncation)]
const fn narrow(value: i64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{DAY_NAMES, MONTH_NAMES};
    use chrono::NaiveDate;

    fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_golden_values() {
        struct TestCase {
            gregorian: (i32, u8, u8),
            sorani: (i32, i32, i32),
        }

        let cases = [
            TestCase {
                gregorian: (2024, 3, 21),
                sorani: (2724, 1, 2),
            },
            TestCase {
                gregorian: (2023, 3, 21),
                sorani: (2723, 1, 1),
            },
            TestCase {
                gregorian: (2025, 3, 21),
                sorani: (2725, 1, 1),
            },
            TestCase {
                gregorian: (2000, 1, 1),
                sorani: (2699, 10, 11),
            },
            TestCase {
                gregorian: (2024, 9, 21),
                sorani: (2724, 6, 31),
            },
            TestCase {
                gregorian: (2024, 9, 22),
                sorani: (2724, 7, 1),
            },
            TestCase {
                gregorian: (2024, 12, 31),
                sorani: (2724, 10, 11),
            },
            TestCase {
                gregorian: (2026, 10, 18),
                sorani: (2726, 7, 26),
            },
            TestCase {
                gregorian: (2025, 3, 20),
                sorani: (2724, 12, 30),
            },
            TestCase {
                gregorian: (1600, 3, 21),
                sorani: (2300, 1, 1),
            },
            TestCase {
                gregorian: (1601, 1, 1),
                sorani: (2300, 10, 12),
            },
            TestCase {
                gregorian: (2100, 12, 31),
                sorani: (2800, 10, 10),
            },
        ];

        for case in &cases {
            let (y, m, d) = case.gregorian;
            let date = SoraniDate::from_gregorian(gregorian(y, m, d));
            assert_eq!(date.to_columns(), case.sorani, "Gregorian {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_newroz_2024() {
        let date = SoraniDate::from_gregorian(gregorian(2024, 3, 21));
        assert_eq!(date.year(), 2724);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 2);
        assert_eq!(date.month_name(), MONTH_NAMES[0]);
        // Thursday
        assert_eq!(date.day_name(), DAY_NAMES[4]);
    }

    #[test]
    fn test_year_boundary_after_leap_year_keeps_reference_result() {
        // The reference arithmetic does not advance the year on this day
        let date = SoraniDate::from_gregorian(gregorian(2024, 3, 20));
        assert_eq!(date.to_columns(), (2723, 1, 1));
        let before = SoraniDate::from_gregorian(gregorian(2024, 3, 19));
        assert_eq!(before.to_columns(), (2723, 12, 29));
    }

    #[test]
    fn test_every_day_1700_to_2100_in_range() {
        let mut current = NaiveDate::from_ymd_opt(1700, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
        while current <= last {
            let input = GregorianDate::from(current);
            let date = SoraniDate::from_gregorian(input);
            assert!((1..=12).contains(&date.month()), "Bad month for {current}");
            assert!((1..=31).contains(&date.day()), "Bad day for {current}");
            assert_eq!(date.month_name(), month_name(date.month()));
            assert!(!date.month_name().is_empty());
            assert_eq!(date.day_name(), DAY_NAMES[usize::from(input.weekday())]);
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_year_offset_is_700_in_june() {
        for year in 1700..2100 {
            let this = SoraniDate::from_gregorian(gregorian(year, 6, 1));
            let next = SoraniDate::from_gregorian(gregorian(year + 1, 6, 1));
            assert_eq!(next.year() - this.year(), 1, "Gregorian {year}");
            assert_eq!(this.year(), year + 700, "Gregorian {year}");
        }
    }

    #[test]
    fn test_early_epoch_months_in_range() {
        let mut current = NaiveDate::from_ymd_opt(700, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(1600, 12, 31).unwrap();
        while current <= last {
            let date = SoraniDate::from_gregorian(current.into());
            assert!((1..=12).contains(&date.month()), "Bad month for {current}");
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_before_621_keeps_signed_remainders() {
        struct TestCase {
            gregorian: (i32, u8, u8),
            sorani: (i32, i32, i32),
        }

        let cases = [
            TestCase {
                gregorian: (1, 1, 1),
                sorani: (663, -26, -2),
            },
            TestCase {
                gregorian: (100, 3, 5),
                sorani: (762, -24, -1),
            },
            TestCase {
                gregorian: (600, 1, 1),
                sorani: (1262, -14, -9),
            },
            TestCase {
                gregorian: (620, 12, 31),
                sorani: (1283, -2, -17),
            },
        ];

        for case in &cases {
            let (y, m, d) = case.gregorian;
            let date = SoraniDate::from_gregorian(gregorian(y, m, d));
            assert_eq!(date.to_columns(), case.sorani, "Gregorian {y:04}-{m:02}-{d:02}");
            assert_eq!(date.month_name(), "", "Gregorian {y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_convert_text() {
        let date = convert("2024-03-21").unwrap();
        assert_eq!(date, SoraniDate::from_gregorian(gregorian(2024, 3, 21)));
    }

    #[test]
    fn test_convert_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let date = convert(naive).unwrap();
        assert_eq!(date.to_columns(), (2699, 10, 11));
        // Saturday
        assert_eq!(date.day_name(), DAY_NAMES[6]);
    }

    #[test]
    fn test_convert_invalid_text() {
        let result = convert("not-a-date");
        assert_eq!(
            result,
            Err(ConvertError::InvalidDateFormat("not-a-date".to_owned()))
        );
    }

    #[test]
    fn test_convert_absent_matches_today() {
        // Retry once in case the two calls straddle midnight
        let matches = (0..2).any(|_| convert(None::<NaiveDate>).unwrap() == today());
        assert!(matches);
    }

    #[test]
    fn test_convert_is_idempotent() {
        let first = convert("1991-08-15").unwrap();
        for _ in 0..10 {
            assert_eq!(convert("1991-08-15").unwrap(), first);
        }
        assert_eq!(first.to_columns(), (2691, 5, 24));
    }

    #[test]
    fn test_from_impl() {
        let date: SoraniDate = gregorian(1979, 2, 11).into();
        assert_eq!(date.to_columns(), (2678, 11, 22));
        // Sunday
        assert_eq!(date.day_name(), DAY_NAMES[0]);
    }

    #[test]
    fn test_serialize_record_shape() {
        let date = SoraniDate::from_gregorian(gregorian(2024, 3, 21));
        let value = serde_json::to_value(date).unwrap();
        assert_eq!(value["day"], 2);
        assert_eq!(value["month"], 1);
        assert_eq!(value["year"], 2724);
        assert_eq!(value["monthName"], MONTH_NAMES[0]);
        assert_eq!(value["dayName"], DAY_NAMES[4]);
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_display_is_full_layout() {
        let date = SoraniDate::from_gregorian(gregorian(2024, 3, 21));
        assert_eq!(date.to_string(), date.format(FormatStyle::Full));
    }
}
