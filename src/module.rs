//! Module domain types

use crate::pom::Packaging;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
pub const FEATURE_FILE: &str = "feature.xml";

/// A candidate module directory directly below the repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub path: PathBuf,
}

impl Module {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_PATH)
    }

    pub fn feature_path(&self) -> PathBuf {
        self.path.join(FEATURE_FILE)
    }

    pub fn pom_path(&self) -> PathBuf {
        self.path.join(crate::pom::POM_FILE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// OSGi bundle with `META-INF/MANIFEST.MF`
    Plugin,
    /// Eclipse feature with `feature.xml`
    Feature,
    /// Hand-maintained `pom.xml` (product, repository), left alone
    ExistingPom,
    Unclassified,
}

impl ModuleKind {
    pub fn packaging(&self) -> Option<Packaging> {
        match self {
            ModuleKind::Plugin => Some(Packaging::EclipsePlugin),
            ModuleKind::Feature => Some(Packaging::EclipseFeature),
            ModuleKind::ExistingPom | ModuleKind::Unclassified => None,
        }
    }

    /// Label of the extracted identifier in report lines
    pub fn identifier_label(&self) -> &'static str {
        match self {
            ModuleKind::Plugin => "BSN",
            ModuleKind::Feature => "id",
            ModuleKind::ExistingPom | ModuleKind::Unclassified => "",
        }
    }
}

/// Why a module did not get a generated POM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    MissingSymbolicName,
    MissingFeatureId,
    Unreadable { path: PathBuf, message: String },
    WriteFailed { path: PathBuf, message: String },
    Unclassified,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSymbolicName => write!(f, "MANIFEST.MF without Bundle-SymbolicName"),
            SkipReason::MissingFeatureId => write!(f, "feature.xml without id"),
            SkipReason::Unreadable { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
            SkipReason::WriteFailed { path, message } => {
                write!(f, "cannot write {}: {}", path.display(), message)
            }
            SkipReason::Unclassified => write!(f, "no MANIFEST.MF, feature.xml or pom.xml"),
        }
    }
}

/// Result of processing one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModuleOutcome {
    Generated {
        name: String,
        kind: ModuleKind,
        identifier: String,
        pom_path: PathBuf,
        /// False when the run was a dry run
        written: bool,
    },
    Kept {
        name: String,
        pom_path: PathBuf,
    },
    Skipped {
        name: String,
        kind: ModuleKind,
        #[serde(flatten)]
        reason: SkipReason,
    },
}

impl ModuleOutcome {
    pub fn name(&self) -> &str {
        match self {
            ModuleOutcome::Generated { name, .. }
            | ModuleOutcome::Kept { name, .. }
            | ModuleOutcome::Skipped { name, .. } => name,
        }
    }

    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleOutcome::Generated { kind, .. } | ModuleOutcome::Skipped { kind, .. } => *kind,
            ModuleOutcome::Kept { .. } => ModuleKind::ExistingPom,
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, ModuleOutcome::Generated { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ModuleOutcome::Skipped { .. })
    }
}
