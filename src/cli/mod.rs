pub mod commands;
pub mod handlers;

pub use commands::{CliArgs, OutputFormatArg};
pub use handlers::{build_config, exit_code, handle_generate};
