//! Sorani month and weekday names.

use std::collections::BTreeMap;

use crate::consts::MAX_MONTH;

/// Sorani month names, in calendar order (index 0 is month 1)
#[rustfmt::skip]
pub const MONTH_NAMES: [&str; 12] = [
    "خاکه‌لێوه", // Xakelêwe
    "گوڵان", // Gullan
    "جۆزه‌ردان", // Cozerdan
    "پووشپه‌ڕ", // Pûşperr
    "گه‌لاوێژ", // Gelawêj
    "خه‌رمانان", // Xermanan
    "ره‌زبه‌ر", // Rezber
    "خه‌زه‌ڵوه‌ر", // Xezellwer
    "سه‌رماوه‌ز", // Sermawez
    "به‌فرانبار", // Befranbar
    "رێبه‌ندان", // Rêbendan
    "ره‌شه‌مێ", // Reşeme
];

/// Sorani weekday names, Sunday first (index 0 is weekday 0)
#[rustfmt::skip]
pub const DAY_NAMES: [&str; 7] = [
    "یه‌کشه‌ممه", // Sunday
    "دووشه‌ممه", // Monday
    "سێشەممه", // Tuesday
    "چوارشه‌ممه", // Wednesday
    "پێنجشه‌ممه", // Thursday
    "هه‌ینی", // Friday
    "شه‌ممه", // Saturday
];

const DAYS_PER_WEEK: u32 = 7;

/// Returns the Sorani name of a month, or an empty string when `month` is
/// outside `1..=12`.
pub fn month_name(month: i32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
        .unwrap_or("")
}

/// Returns the Sorani name of a weekday (0 = Sunday). Values past Saturday wrap.
pub fn day_name(weekday: u32) -> &'static str {
    let idx = (weekday % DAYS_PER_WEEK) as usize;
    DAY_NAMES[idx]
}

/// All month names keyed `1..=12`.
///
/// The map is built fresh on each call.
pub fn month_names() -> BTreeMap<u8, &'static str> {
    (1..=MAX_MONTH).zip(MONTH_NAMES).collect()
}

/// All weekday names keyed `0..=6`, Sunday first.
///
/// The map is built fresh on each call.
pub fn day_names() -> BTreeMap<u8, &'static str> {
    (0..).zip(DAY_NAMES).collect()
}
