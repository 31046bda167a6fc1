//! Tycho module POM rendering

use roxmltree::Document;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const POM_FILE: &str = "pom.xml";

#[derive(Debug, Error)]
pub enum PomError {
    #[error("Invalid POM XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Root element is <{0}>, expected <project>")]
    NotAProject(String),

    #[error("No artifactId found in pom.xml")]
    MissingArtifactId,
}

/// Tycho packaging type of a generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Packaging {
    EclipsePlugin,
    EclipseFeature,
}

impl Packaging {
    pub fn as_str(&self) -> &'static str {
        match self {
            Packaging::EclipsePlugin => "eclipse-plugin",
            Packaging::EclipseFeature => "eclipse-feature",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinates of the aggregator POM every module inherits from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl fmt::Display for ParentCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

const POM_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
                             http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
"#;

const ARTIFACT_ID_NOTE: &str =
    "  <!-- artifactId MUST be identical to the Bundle-SymbolicName in MANIFEST.MF -->\n";

/// Renders the module POM. Plugin POMs carry a note tying the artifactId to the
/// bundle's symbolic name; feature POMs do not.
pub fn render(packaging: Packaging, parent: &ParentCoordinates, artifact_id: &str) -> String {
    let mut pom = String::with_capacity(768);
    pom.push_str(POM_HEADER);
    pom.push_str("  <parent>\n");
    pom.push_str(&format!("    <groupId>{}</groupId>\n", escape_xml(&parent.group_id)));
    pom.push_str(&format!(
        "    <artifactId>{}</artifactId>\n",
        escape_xml(&parent.artifact_id)
    ));
    pom.push_str(&format!("    <version>{}</version>\n", escape_xml(&parent.version)));
    pom.push_str("    <relativePath>../pom.xml</relativePath>\n");
    pom.push_str("  </parent>\n");
    if packaging == Packaging::EclipsePlugin {
        pom.push_str(ARTIFACT_ID_NOTE);
    }
    pom.push_str(&format!("  <artifactId>{}</artifactId>\n", escape_xml(artifact_id)));
    pom.push_str(&format!("  <packaging>{}</packaging>\n", packaging.as_str()));
    pom.push_str("</project>\n");
    pom
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reads the module's own `artifactId` (direct child of `<project>`, not the parent's).
/// The text is returned exactly as written, surrounding whitespace included.
pub fn read_artifact_id(xml: &str) -> Result<String, PomError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    if root.tag_name().name() != "project" {
        return Err(PomError::NotAProject(root.tag_name().name().to_string()));
    }

    root.children()
        .find(|child| child.tag_name().name() == "artifactId")
        .and_then(|child| child.text())
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .ok_or(PomError::MissingArtifactId)
}

/// Reads the `<packaging>` of an existing POM, if declared
pub fn read_packaging(xml: &str) -> Result<Option<String>, PomError> {
    let doc = Document::parse(xml)?;

    Ok(doc
        .root_element()
        .children()
        .find(|child| child.tag_name().name() == "packaging")
        .and_then(|child| child.text())
        .map(|text| text.trim().to_string()))
}
