use clap::Parser;

use leapcheck::cli::args::usage_error;
use leapcheck::cli::commands::execute;
use leapcheck::cli::{output, Cli, CliError};
use leapcheck::{logging, RunConfig};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{}", usage_error(&e));
            std::process::exit(e.exit_code());
        }
    };
    let config = RunConfig::from(&cli);

    if let Err(e) = logging::init(config.log_level) {
        let e = CliError::from(e);
        output::error(&e);
        std::process::exit(e.exit_code());
    }

    std::process::exit(execute(&config));
}
