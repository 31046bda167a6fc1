//! tycho-pomgen - Maven Tycho pom.xml generator for Eclipse repositories
//!
//! Walks the immediate subdirectories of a repository root and writes a minimal
//! `pom.xml` for every OSGi plugin (`META-INF/MANIFEST.MF`) and Eclipse feature
//! (`feature.xml`) it finds. Tycho requires each module's `artifactId` to match
//! its Bundle-SymbolicName or feature id, so the identifier is taken from the
//! descriptor rather than the directory name. Modules that only have a
//! hand-written `pom.xml` are left untouched.
//!
//! # Example Usage
//!
//! ```no_run
//! use tycho_pomgen::{PomGenerator, PomgenConfig, RealFileSystem, RunOptions};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let fs = RealFileSystem;
//! let config = PomgenConfig::default();
//! let report = PomGenerator::new(&fs, &config)
//!     .run(Path::new("."), &RunOptions::default())?;
//!
//! println!("generated: {:?}", report.included());
//! println!("skipped: {:?}", report.skipped());
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`manifest`]: MANIFEST.MF header parsing and Bundle-SymbolicName extraction
//! - [`feature`]: feature id extraction from `feature.xml`
//! - [`pom`]: POM rendering and read-back
//! - [`generator`]: discovery, classification, planning and writing
//! - [`report`]: run report and its output formats

pub mod cli;
pub mod config;
pub mod feature;
pub mod fs;
pub mod generator;
pub mod manifest;
pub mod module;
pub mod pom;
pub mod report;
pub mod util;

pub use config::{ConfigError, PomgenConfig};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use generator::{ModulePlan, PomGenerator, RunOptions};
pub use module::{Module, ModuleKind, ModuleOutcome, SkipReason};
pub use pom::{Packaging, ParentCoordinates, PomError};
pub use report::{OutputFormat, OutputFormatter, RunReport};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
