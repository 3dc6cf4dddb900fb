//! Gregorian leap year rule

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is leap when it is divisible by 4, unless it is a century year
/// that is not divisible by 400. Year 0 and negative years follow the same
/// rule: only zero remainders are tested, so the sign of `%` is irrelevant.
pub const fn is_leap(year: i64) -> bool {
    divisible(year, 4) && (!divisible(year, 100) || divisible(year, 400))
}

const fn divisible(year: i64, by: i64) -> bool {
    year % by == 0
}
