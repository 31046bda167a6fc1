use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generates Maven Tycho pom.xml files for Eclipse plugin and feature modules
#[derive(Parser, Debug)]
#[command(
    name = "tycho-pomgen",
    about = "Generates Maven Tycho pom.xml files for Eclipse plugin and feature modules",
    version,
    author,
    long_about = "tycho-pomgen scans the immediate subdirectories of a repository root. \
                  Directories with META-INF/MANIFEST.MF get an eclipse-plugin pom.xml whose \
                  artifactId is the Bundle-SymbolicName; directories with feature.xml get an \
                  eclipse-feature pom.xml whose artifactId is the feature id. Directories that \
                  only carry a hand-written pom.xml are left untouched.\n\n\
                  Examples:\n  \
                  tycho-pomgen\n  \
                  tycho-pomgen /path/to/repo --dry-run\n  \
                  tycho-pomgen --format json --fail-on-skip"
)]
pub struct CliArgs {
    #[arg(
        value_name = "ROOT",
        help = "Repository root containing the modules (defaults to current directory)"
    )]
    pub root: Option<PathBuf>,

    #[arg(long, help = "Plan and report without writing any pom.xml")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "GROUP_ID", help = "Parent groupId")]
    pub parent_group: Option<String>,

    #[arg(long, value_name = "ARTIFACT_ID", help = "Parent artifactId")]
    pub parent_artifact: Option<String>,

    #[arg(long, value_name = "VERSION", help = "Parent version")]
    pub parent_version: Option<String>,

    #[arg(
        long = "ignore",
        value_name = "NAME",
        help = "Additional top-level directory to skip (repeatable)"
    )]
    pub ignore: Vec<String>,

    #[arg(long, help = "Exit with status 2 when any module was skipped")]
    pub fail_on_skip: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for crate::report::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => crate::report::OutputFormat::Json,
            OutputFormatArg::Yaml => crate::report::OutputFormat::Yaml,
            OutputFormatArg::Human => crate::report::OutputFormat::Human,
        }
    }
}
