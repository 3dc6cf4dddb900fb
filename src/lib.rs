//! Gregorian leap year checking with an exit-code CLI

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod logging;
pub mod util;

pub use config::RunConfig;
pub use domain::{is_leap, Year};
pub use logging::LogLevel;
