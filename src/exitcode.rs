//! Process exit codes
//!
//! The answer itself is reported through the exit status so the binary
//! composes with shell conditionals (`leapcheck 2024 && ...`).

/// Year is a leap year
pub const LEAP: i32 = 0;

/// Year is a common (non-leap) year
pub const COMMON: i32 = 1;

/// Command line usage error (matches clap's own exit status)
pub const USAGE: i32 = 2;

/// Internal software error (BSD sysexits.h EX_SOFTWARE)
pub const SOFTWARE: i32 = 70;

/// Exit code for a predicate result.
pub const fn for_result(leap: bool) -> i32 {
    if leap {
        LEAP
    } else {
        COMMON
    }
}
