//! CLI-level errors

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot initialise logging: {0}")]
    Logging(#[from] TryInitError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Logging(_) => crate::exitcode::SOFTWARE,
        }
    }
}
