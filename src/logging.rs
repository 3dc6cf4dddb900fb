//! Diagnostic severity levels and subscriber setup
//!
//! Severity names follow the conventional scale
//! `DEBUG < INFO < WARNING < ERROR < CRITICAL` and are mapped onto
//! `tracing` level filters.

use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt as tfmt, Layer};

/// Diagnostic verbosity selected with `--log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Everything, including trace output
    NotSet,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

/// Unknown severity name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level '{0}' (expected one of: DEBUG, INFO, WARNING, ERROR, CRITICAL)")]
pub struct ParseLevelError(pub String);

impl LogLevel {
    /// Canonical upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::NotSet => "NOTSET",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Map to the closest `tracing` filter.
    ///
    /// `tracing` has nothing above ERROR, so CRITICAL shares its filter.
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::NotSet => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOTSET" => Ok(LogLevel::NotSet),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a subscriber that writes formatted events at or above `level` to `writer`.
///
/// Nothing is installed; use [`init`] for the process-wide subscriber or
/// `tracing::subscriber::with_default` to scope it.
pub fn subscriber<W>(
    level: LogLevel,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = tfmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry().with(fmt_layer.with_filter(level.level_filter()))
}

/// Install the global subscriber, writing to stderr.
pub fn init(level: LogLevel) -> Result<(), TryInitError> {
    let ansi = std::io::stderr().is_terminal();
    subscriber(level, std::io::stderr, ansi).try_init()?;
    tracing::trace!("logging initialised at {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_when_created_then_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn given_levels_when_compared_then_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn given_unknown_name_when_parsing_then_error_names_input() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseLevelError("verbose".into()));
        assert!(err.to_string().contains("'verbose'"));
        assert!(err.to_string().contains("CRITICAL"));
    }

    #[test]
    fn given_non_canonical_spelling_when_parsing_then_rejected() {
        for name in ["debug", "Info", " INFO ", "warning"] {
            assert_eq!(name.parse::<LogLevel>(), Err(ParseLevelError(name.into())));
        }
    }

    #[test]
    fn given_level_when_displayed_then_round_trips() {
        for level in [
            LogLevel::NotSet,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Critical,
        ] {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }
}
