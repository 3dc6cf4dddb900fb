//! CLI argument definitions using clap

use clap::{CommandFactory, Parser};

use crate::domain::Year;
use crate::logging::LogLevel;

/// Leap year checker: exits 0 if YEAR is a leap year, 1 otherwise
#[derive(Parser, Debug)]
#[command(name = "leapcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long, value_name = "LEVEL", default_value = "INFO")]
    pub log: LogLevel,

    /// Year to check
    #[arg(allow_negative_numbers = true)]
    pub year: Year,
}

/// Render a parse failure for stderr, always ending with the usage line.
///
/// clap only prints usage for some error kinds (missing arguments), not for
/// invalid values.
pub fn usage_error(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    if rendered.contains("Usage:") {
        return rendered;
    }
    let usage = Cli::command().render_usage();
    format!("{}\n\n{}\n", rendered.trim_end(), usage)
}
