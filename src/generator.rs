//! Module discovery, classification and POM generation
//!
//! The generator works in two steps. [`PomGenerator::plan`] classifies a module and
//! renders its POM without side effects, so it can be exercised against a
//! [`MockFileSystem`](crate::fs::MockFileSystem). [`PomGenerator::run`] plans every
//! module under the root in name order and then performs the writes.
//!
//! Per-module problems (unreadable files, missing headers, failed writes) become
//! [`SkipReason`]s. Only failing to list the root directory is an error.

use crate::config::PomgenConfig;
use crate::feature::extract_feature_id;
use crate::fs::FileSystem;
use crate::manifest::extract_symbolic_name;
use crate::module::{Module, ModuleKind, ModuleOutcome, SkipReason};
use crate::pom;
use crate::report::RunReport;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Plan and report without writing any file
    pub dry_run: bool,
}

/// What to do with one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModulePlan {
    /// Write `contents` to the outcome's POM path
    Write {
        outcome: ModuleOutcome,
        contents: String,
    },
    /// Nothing to write
    Done(ModuleOutcome),
}

impl ModulePlan {
    pub fn outcome(&self) -> &ModuleOutcome {
        match self {
            ModulePlan::Write { outcome, .. } | ModulePlan::Done(outcome) => outcome,
        }
    }
}

pub struct PomGenerator<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    config: &'a PomgenConfig,
}

impl<'a, F: FileSystem + ?Sized> PomGenerator<'a, F> {
    pub fn new(fs: &'a F, config: &'a PomgenConfig) -> Self {
        Self { fs, config }
    }

    /// Immediate subdirectories of `root` that may be modules, sorted by name
    pub fn discover(&self, root: &Path) -> Result<Vec<Module>> {
        let entries = self
            .fs
            .read_dir(root)
            .with_context(|| format!("Failed to list modules in {}", root.display()))?;

        let mut modules: Vec<Module> = entries
            .into_iter()
            .filter(|entry| entry.is_dir())
            .filter(|entry| {
                let ignored = self.config.is_ignored(entry.file_name());
                if ignored {
                    debug!(dir = entry.file_name(), "Ignoring directory");
                }
                !ignored
            })
            .map(|entry| Module::new(entry.name, entry.path))
            .collect();

        modules.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(modules)
    }

    /// First match wins: manifest, then feature.xml, then an existing pom.xml
    pub fn classify(&self, module: &Module) -> ModuleKind {
        if self.fs.is_file(&module.manifest_path()) {
            ModuleKind::Plugin
        } else if self.fs.is_file(&module.feature_path()) {
            ModuleKind::Feature
        } else if self.fs.exists(&module.pom_path()) {
            ModuleKind::ExistingPom
        } else {
            ModuleKind::Unclassified
        }
    }

    pub fn plan(&self, module: &Module) -> ModulePlan {
        let kind = self.classify(module);
        debug!(module = %module.name, ?kind, "Classified module");

        let source = match kind {
            ModuleKind::Plugin => module.manifest_path(),
            ModuleKind::Feature => module.feature_path(),
            ModuleKind::ExistingPom => {
                self.inspect_existing_pom(module);
                return ModulePlan::Done(ModuleOutcome::Kept {
                    name: module.name.clone(),
                    pom_path: module.pom_path(),
                });
            }
            ModuleKind::Unclassified => {
                return ModulePlan::Done(skipped(module, kind, SkipReason::Unclassified));
            }
        };

        let text = match self.fs.read_to_string_lossy(&source) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %source.display(), error = %e, "Failed to read module descriptor");
                return ModulePlan::Done(skipped(
                    module,
                    kind,
                    SkipReason::Unreadable {
                        path: source,
                        message: root_cause(&e),
                    },
                ));
            }
        };

        let (identifier, missing) = match kind {
            ModuleKind::Plugin => (extract_symbolic_name(&text), SkipReason::MissingSymbolicName),
            _ => (extract_feature_id(&text), SkipReason::MissingFeatureId),
        };
        let Some(identifier) = identifier else {
            warn!(module = %module.name, path = %source.display(), "{}", missing);
            return ModulePlan::Done(skipped(module, kind, missing));
        };

        let Some(packaging) = kind.packaging() else {
            return ModulePlan::Done(skipped(module, kind, SkipReason::Unclassified));
        };
        let contents = pom::render(packaging, &self.config.parent, &identifier);

        ModulePlan::Write {
            outcome: ModuleOutcome::Generated {
                name: module.name.clone(),
                kind,
                identifier,
                pom_path: module.pom_path(),
                written: false,
            },
            contents,
        }
    }

    pub fn run(&self, root: &Path, options: &RunOptions) -> Result<RunReport> {
        let modules = self.discover(root)?;
        info!(root = %root.display(), count = modules.len(), "Discovered candidate modules");

        let mut report = RunReport::new(options.dry_run);
        for module in &modules {
            let outcome = match self.plan(module) {
                ModulePlan::Done(outcome) => outcome,
                ModulePlan::Write { outcome, .. } if options.dry_run => outcome,
                ModulePlan::Write { outcome, contents } => self.apply(module, outcome, &contents),
            };
            report.push(outcome);
        }

        info!(
            included = report.included().len(),
            skipped = report.skipped().len(),
            kept = report.kept().len(),
            "POM generation finished"
        );
        Ok(report)
    }

    fn apply(&self, module: &Module, outcome: ModuleOutcome, contents: &str) -> ModuleOutcome {
        let (name, kind, identifier, pom_path) = match outcome {
            ModuleOutcome::Generated {
                name,
                kind,
                identifier,
                pom_path,
                ..
            } => (name, kind, identifier, pom_path),
            other => return other,
        };

        match self.fs.write(&pom_path, contents) {
            Ok(()) => {
                debug!(path = %pom_path.display(), "Wrote pom.xml");
                ModuleOutcome::Generated {
                    name,
                    kind,
                    identifier,
                    pom_path,
                    written: true,
                }
            }
            Err(e) => {
                warn!(path = %pom_path.display(), error = %e, "Failed to write pom.xml");
                skipped(
                    module,
                    kind,
                    SkipReason::WriteFailed {
                        path: pom_path,
                        message: root_cause(&e),
                    },
                )
            }
        }
    }

    fn inspect_existing_pom(&self, module: &Module) {
        let path = module.pom_path();
        let Ok(text) = self.fs.read_to_string_lossy(&path) else {
            return;
        };
        match (pom::read_artifact_id(&text), pom::read_packaging(&text)) {
            (Ok(artifact_id), Ok(packaging)) => debug!(
                module = %module.name,
                artifact_id = %artifact_id,
                packaging = packaging.as_deref().unwrap_or("jar"),
                "Keeping existing pom.xml"
            ),
            (Err(e), _) | (_, Err(e)) => {
                debug!(module = %module.name, error = %e, "Keeping unparseable pom.xml")
            }
        }
    }
}

fn skipped(module: &Module, kind: ModuleKind, reason: SkipReason) -> ModuleOutcome {
    ModuleOutcome::Skipped {
        name: module.name.clone(),
        kind,
        reason,
    }
}

fn root_cause(err: &anyhow::Error) -> String {
    err.root_cause().to_string()
}
