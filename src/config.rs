//! Run configuration
//!
//! Everything a single invocation needs, resolved up front and passed into
//! the entry point as a value. No environment variables or files are read.

use crate::cli::Cli;
use crate::domain::Year;
use crate::logging::LogLevel;

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Year to classify (proleptic Gregorian, any size, may be zero or negative)
    pub year: Year,
    /// Minimum severity of emitted diagnostics
    pub log_level: LogLevel,
}

impl RunConfig {
    pub fn new(year: impl Into<Year>, log_level: LogLevel) -> Self {
        Self {
            year: year.into(),
            log_level,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.year.clone(), cli.log)
    }
}
