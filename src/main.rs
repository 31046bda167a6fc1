use tycho_pomgen::cli::commands::CliArgs;
use tycho_pomgen::cli::handlers::handle_generate;
use tycho_pomgen::util::logging::{self, parse_level, LoggingConfig};
use tycho_pomgen::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("tycho-pomgen v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_generate(&args));
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("TYCHO_POMGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    logging::init_logging(LoggingConfig::from_env_with_level(level));
}
