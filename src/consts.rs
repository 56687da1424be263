/// Number of months in both calendars
pub(crate) const MAX_MONTH: u8 = 12;

/// Month number for February, the last month that does not advance `gy2`
pub(crate) const FEBRUARY: u8 = 2;

/// Days in each Gregorian month for a non-leap year (index 0 is a zero sentinel,
/// months are 1-indexed). Only used to accumulate day-of-year offsets; the
/// leap day is carried by the `gy2` term of the conversion, not by this table.
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Gregorian years after this one are shifted from the late epoch
pub(crate) const LATE_EPOCH_GREGORIAN: i64 = 1600;
/// Solar year counter seed for the late epoch
pub(crate) const LATE_EPOCH_SOLAR: i64 = 979;
/// Gregorian offset for years on or before `LATE_EPOCH_GREGORIAN`
pub(crate) const EARLY_EPOCH_GREGORIAN: i64 = 621;

/// Days between the start of the Gregorian epoch year and the solar new year
pub(crate) const NEW_YEAR_OFFSET: i64 = 80;

/// Days in a 33-year solar cycle
pub(crate) const DAYS_PER_33_YEARS: i64 = 12_053;
/// Days in a 4-year cycle
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Day of the year on which the 30-day months begin (months 7-12)
pub(crate) const SECOND_HALF_START: i64 = 186;

/// Difference between the solar (Jalali) year and the Sorani Kurdish year
pub const KURDISH_YEAR_OFFSET: i64 = 1_321;

/// Separator placed after the day name in the full layout
pub(crate) const DAY_NAME_SEPARATOR: char = '،';
/// Separator between numeric components in the short layout
pub(crate) const SHORT_SEPARATOR: char = '/';
