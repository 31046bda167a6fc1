//! Configuration for POM generation
//!
//! Defaults target the CIMTool Tycho build. Every value can be overridden from the
//! environment, and the CLI flags in turn override the environment.
//!
//! # Environment Variables
//!
//! - `TYCHO_POMGEN_PARENT_GROUP`: parent groupId - default: "au.com.langdale.cimtool"
//! - `TYCHO_POMGEN_PARENT_ARTIFACT`: parent artifactId - default: "cimtool-parent"
//! - `TYCHO_POMGEN_PARENT_VERSION`: parent version - default: "2.2.0-SNAPSHOT"
//! - `TYCHO_POMGEN_IGNORE`: comma-separated directory names to skip, added to the built-in set
//!
//! `TYCHO_POMGEN_LOG_LEVEL` belongs to the logging setup in [`crate::util::logging`];
//! an unknown value there falls back to INFO.

use crate::pom::ParentCoordinates;
use std::env;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PARENT_GROUP: &str = "au.com.langdale.cimtool";
pub const DEFAULT_PARENT_ARTIFACT: &str = "cimtool-parent";
pub const DEFAULT_PARENT_VERSION: &str = "2.2.0-SNAPSHOT";

/// Directories that are never modules
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", ".github", "docs", "target", "node_modules"];

/// Directories starting with this character are hidden and never modules
pub const RESERVED_PREFIX: char = '.';

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone)]
pub struct PomgenConfig {
    pub parent: ParentCoordinates,
    pub ignored_dirs: Vec<String>,
}

impl Default for PomgenConfig {
    fn default() -> Self {
        let parent = ParentCoordinates {
            group_id: env::var("TYCHO_POMGEN_PARENT_GROUP")
                .unwrap_or_else(|_| DEFAULT_PARENT_GROUP.to_string()),
            artifact_id: env::var("TYCHO_POMGEN_PARENT_ARTIFACT")
                .unwrap_or_else(|_| DEFAULT_PARENT_ARTIFACT.to_string()),
            version: env::var("TYCHO_POMGEN_PARENT_VERSION")
                .unwrap_or_else(|_| DEFAULT_PARENT_VERSION.to_string()),
        };

        let mut ignored_dirs: Vec<String> =
            DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect();
        if let Ok(extra) = env::var("TYCHO_POMGEN_IGNORE") {
            ignored_dirs.extend(parse_ignore_list(&extra));
        }

        Self {
            parent,
            ignored_dirs,
        }
    }
}

impl PomgenConfig {
    /// Built-in defaults without consulting the environment
    pub fn builtin() -> Self {
        Self {
            parent: ParentCoordinates {
                group_id: DEFAULT_PARENT_GROUP.to_string(),
                artifact_id: DEFAULT_PARENT_ARTIFACT.to_string(),
                version: DEFAULT_PARENT_VERSION.to_string(),
            },
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let coordinates = [
            ("parent groupId", &self.parent.group_id),
            ("parent artifactId", &self.parent.artifact_id),
            ("parent version", &self.parent.version),
        ];

        for (field, value) in coordinates {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} must not be empty",
                    field
                )));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::ParseError {
                    field: field.to_string(),
                    error: format!("'{}' contains whitespace", value),
                });
            }
        }

        Ok(())
    }

    pub fn add_ignored_dir(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.ignored_dirs.contains(&name) {
            self.ignored_dirs.push(name);
        }
    }

    /// Whether a top-level directory name is excluded from module discovery
    pub fn is_ignored(&self, name: &str) -> bool {
        name.starts_with(RESERVED_PREFIX) || self.ignored_dirs.iter().any(|d| d == name)
    }
}

impl fmt::Display for PomgenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tycho POM Generator Configuration:")?;
        writeln!(f, "  Parent: {}", self.parent)?;
        writeln!(f, "  Ignored Dirs: {}", self.ignored_dirs.join(", "))?;
        Ok(())
    }
}

fn parse_ignore_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
