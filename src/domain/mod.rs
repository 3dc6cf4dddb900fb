//! Domain layer: calendar rules
//!
//! Pure functions only (no I/O, no CLI, no logging setup).

pub mod leap;
pub mod year;

pub use leap::is_leap;
pub use year::{ParseYearError, Year};
