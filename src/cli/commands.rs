use tracing::{debug, instrument};

use crate::config::RunConfig;
use crate::exitcode;

/// Classify the configured year and return the process exit code.
///
/// Logs through the current subscriber; installing one is the caller's job.
#[instrument(level = "debug", skip_all, fields(year = %config.year))]
pub fn execute(config: &RunConfig) -> i32 {
    let leap = config.year.is_leap();
    if leap {
        debug!("The year {} is leap", config.year);
    } else {
        debug!("The year {} is not leap", config.year);
    }
    exitcode::for_result(leap)
}
