use crate::cli::commands::CliArgs;
use crate::config::{ConfigError, PomgenConfig};
use crate::fs::RealFileSystem;
use crate::generator::{PomGenerator, RunOptions};
use crate::report::{OutputFormatter, RunReport};
use std::env;
use std::path::PathBuf;
use tracing::{debug, error};

/// Run completed (skips are not failures unless `--fail-on-skip`)
pub const EXIT_SUCCESS: i32 = 0;
/// Run could not start: invalid configuration or unreadable root
pub const EXIT_FAILURE: i32 = 1;
/// `--fail-on-skip` and at least one module was skipped
pub const EXIT_SKIPPED: i32 = 2;

pub fn handle_generate(args: &CliArgs) -> i32 {
    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return EXIT_FAILURE;
        }
    };
    debug!("{}", config);

    let root = resolve_root(args);
    let fs = RealFileSystem;
    let generator = PomGenerator::new(&fs, &config);
    let options = RunOptions {
        dry_run: args.dry_run,
    };

    let report = match generator.run(&root, &options) {
        Ok(report) => report,
        Err(e) => {
            error!("POM generation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    match OutputFormatter::new(args.format.into()).format(&report) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    }

    exit_code(&report, args.fail_on_skip)
}

/// Environment-backed defaults with CLI flags layered on top
pub fn build_config(args: &CliArgs) -> Result<PomgenConfig, ConfigError> {
    let mut config = PomgenConfig::default();

    if let Some(group) = &args.parent_group {
        config.parent.group_id = group.clone();
    }
    if let Some(artifact) = &args.parent_artifact {
        config.parent.artifact_id = artifact.clone();
    }
    if let Some(version) = &args.parent_version {
        config.parent.version = version.clone();
    }
    for name in &args.ignore {
        config.add_ignored_dir(name.as_str());
    }

    config.validate()?;
    Ok(config)
}

pub fn exit_code(report: &RunReport, fail_on_skip: bool) -> i32 {
    if fail_on_skip && report.has_skipped() {
        EXIT_SKIPPED
    } else {
        EXIT_SUCCESS
    }
}

fn resolve_root(args: &CliArgs) -> PathBuf {
    match &args.root {
        Some(root) => root.clone(),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
