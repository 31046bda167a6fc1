//! Run report and its output formats
//!
//! The human format is the console log CI users read:
//!
//! ```text
//!   [eclipse-plugin]  org.foo.a                       BSN=org.foo.a
//!   [eclipse-feature] org.foo.feature                 id=org.foo.feature
//!   [keep pom]        org.foo.product                 (existing pom.xml, no MANIFEST.MF or feature.xml)
//!   [skip]            org.foo.broken                  (MANIFEST.MF without Bundle-SymbolicName)
//! ```
//!
//! followed by the included/skipped tally. JSON and YAML carry the same data for tooling.

use crate::module::ModuleOutcome;
use anyhow::{Context, Result};
use serde::Serialize;

/// Outcomes of one generator run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<ModuleOutcome>,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            dry_run,
        }
    }

    pub fn push(&mut self, outcome: ModuleOutcome) {
        self.outcomes.push(outcome);
    }

    /// Names of modules that got a generated POM
    pub fn included(&self) -> Vec<&str> {
        self.names_where(ModuleOutcome::is_included)
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.names_where(ModuleOutcome::is_skipped)
    }

    /// Names of modules whose hand-written POM was left alone
    pub fn kept(&self) -> Vec<&str> {
        self.names_where(|o| matches!(o, ModuleOutcome::Kept { .. }))
    }

    pub fn has_skipped(&self) -> bool {
        self.outcomes.iter().any(ModuleOutcome::is_skipped)
    }

    fn names_where(&self, pred: impl Fn(&ModuleOutcome) -> bool) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|&o| pred(o))
            .map(ModuleOutcome::name)
            .collect()
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    dry_run: bool,
    included: Vec<&'a str>,
    skipped: Vec<&'a str>,
    kept: Vec<&'a str>,
    modules: &'a [ModuleOutcome],
}

impl<'a> From<&'a RunReport> for ReportDocument<'a> {
    fn from(report: &'a RunReport) -> Self {
        Self {
            dry_run: report.dry_run,
            included: report.included(),
            skipped: report.skipped(),
            kept: report.kept(),
            modules: &report.outcomes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Console report
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Yaml => self.format_yaml(report),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_json(&self, report: &RunReport) -> Result<String> {
        serde_json::to_string_pretty(&ReportDocument::from(report))
            .context("Failed to serialize run report to JSON")
    }

    fn format_yaml(&self, report: &RunReport) -> Result<String> {
        serde_yaml::to_string(&ReportDocument::from(report))
            .context("Failed to serialize run report to YAML")
    }

    fn format_human(&self, report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str("=== Generating module pom.xml files ===\n");
        if report.dry_run {
            output.push_str("(dry run: no files written)\n");
        }
        output.push('\n');

        for outcome in &report.outcomes {
            output.push_str(&format_line(outcome));
            output.push('\n');
        }

        let included = report.included();
        output.push_str(&format!("\nTotal included: {}\n", included.len()));
        output.push_str(&format!("Total skipped:  {}\n", report.skipped().len()));
        output.push_str(&format!("Modules: [{}]\n", included.join(", ")));
        output
    }
}

/// One report line: `[<tag>] <module> <label>=<value>` or `[skip] <module> (<reason>)`
pub fn format_line(outcome: &ModuleOutcome) -> String {
    let (tag, detail) = match outcome {
        ModuleOutcome::Generated {
            kind, identifier, ..
        } => {
            let tag = kind
                .packaging()
                .map(|p| format!("[{}]", p))
                .unwrap_or_else(|| "[generated]".to_string());
            (tag, format!("{}={}", kind.identifier_label(), identifier))
        }
        ModuleOutcome::Kept { .. } => (
            "[keep pom]".to_string(),
            "(existing pom.xml, no MANIFEST.MF or feature.xml)".to_string(),
        ),
        ModuleOutcome::Skipped { reason, .. } => ("[skip]".to_string(), format!("({})", reason)),
    };

    format!("  {:<18}{:<30}  {}", tag, outcome.name(), detail)
}
