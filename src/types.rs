use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DECEMBER, JANUARY, LEAP_MODULUS,
    LEAP_MULTIPLIER, LEAP_OFFSET, LEAP_THRESHOLD, LEAP_WEEK,
};

// Calendar rules

/// Returns whether `year` carries the trailing leap week.
///
/// The rule is a linear congruence rather than a periodic cycle, so leap years
/// are spread as evenly as possible over a 293-year cycle.
pub const fn is_leap_year(year: i32) -> bool {
    (LEAP_MULTIPLIER * year as i64 + LEAP_OFFSET).rem_euclid(LEAP_MODULUS) < LEAP_THRESHOLD
}

/// Returns the length of `month`, or 0 when the month does not exist.
///
/// Month 13 (the leap week) only exists when `is_leap` is set. Summing over a
/// range of months therefore skips nonexistent ones.
pub const fn days_in_month(month: u8, is_leap: bool) -> u8 {
    match month {
        JANUARY..=DECEMBER => DAYS_IN_MONTH[month as usize],
        LEAP_WEEK if is_leap => DAYS_IN_MONTH[LEAP_WEEK as usize],
        _ => 0,
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}
