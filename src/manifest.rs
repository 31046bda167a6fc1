//! MANIFEST.MF header parsing
//!
//! Manifests are RFC822-style `Name: value` headers. Lines are wrapped at 72 bytes
//! by most tooling, with continuation lines starting with a single space, so a
//! long `Bundle-SymbolicName` may be split across several physical lines. Blank
//! lines separate the main section from per-entry sections.

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

pub const SYMBOLIC_NAME_HEADER: &str = "Bundle-SymbolicName";

/// Parsed manifest: the main section followed by any per-entry sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main: Vec<(String, String)>,
    sections: Vec<Vec<(String, String)>>,
}

impl Manifest {
    /// First value of `name` in document order, trimmed. The main section is
    /// searched first, then each entry section, so a stray blank line ahead of
    /// the header does not hide it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.main
            .iter()
            .chain(self.sections.iter().flatten())
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.trim())
    }

    fn push(&mut self, header: Option<(String, String)>, in_main: bool) {
        let Some(header) = header else {
            return;
        };
        if in_main {
            self.main.push(header);
        } else if let Some(section) = self.sections.last_mut() {
            section.push(header);
        }
    }
}

pub fn parse_headers(text: &str) -> Manifest {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut manifest = Manifest::default();
    let mut in_main = true;
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(' ') {
            match current.as_mut() {
                Some((_, value)) => value.push_str(rest.trim_end_matches('\r')),
                None => debug!("Ignoring continuation line without a header: {:?}", line),
            }
            continue;
        }

        manifest.push(current.take(), in_main);

        if line.trim().is_empty() {
            // A blank line closes the current section
            if in_main || manifest.sections.last().is_some_and(|s| !s.is_empty()) {
                manifest.sections.push(Vec::new());
            }
            in_main = false;
            continue;
        }

        match line.split_once(':') {
            Some((name, value)) => {
                current = Some((name.to_string(), value.trim_end_matches('\r').to_string()));
            }
            None => debug!("Ignoring malformed manifest line: {:?}", line),
        }
    }
    manifest.push(current.take(), in_main);

    manifest.sections.retain(|s| !s.is_empty());
    manifest
}

/// Extracts the bundle symbolic name, dropping `;`-delimited directives
/// such as `;singleton:=true`.
pub fn extract_symbolic_name(text: &str) -> Option<String> {
    let manifest = parse_headers(text);
    let value = manifest.get(SYMBOLIC_NAME_HEADER)?;

    let name = value
        .split(|c: char| c == ';' || c.is_whitespace())
        .next()
        .unwrap_or_default();

    if name.is_empty() {
        return None;
    }

    if !is_valid_symbolic_name(name) {
        warn!(
            symbolic_name = name,
            "Bundle-SymbolicName does not look like an OSGi symbolic name"
        );
    }

    Some(name.to_string())
}

pub fn is_valid_symbolic_name(name: &str) -> bool {
    static SYMBOLIC_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = SYMBOLIC_NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_\-]+(\.[A-Za-z0-9_\-]+)*$").expect("Invalid symbolic name regex")
    });
    re.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        plain = { "Bundle-SymbolicName: org.example.core\n", "org.example.core" },
        singleton = { "Bundle-SymbolicName: org.example.ui;singleton:=true\n", "org.example.ui" },
        singleton_spaced = { "Bundle-SymbolicName: org.example.ui; singleton:=true\n", "org.example.ui" },
        no_space_after_colon = { "Bundle-SymbolicName:org.example.core\n", "org.example.core" },
        trailing_whitespace = { "Bundle-SymbolicName: org.example.core   \n", "org.example.core" },
        crlf = { "Manifest-Version: 1.0\r\nBundle-SymbolicName: org.example.core\r\n", "org.example.core" },
        no_trailing_newline = { "Bundle-SymbolicName: org.example.core", "org.example.core" },
        bom = { "\u{feff}Bundle-SymbolicName: org.example.core\n", "org.example.core" },
    )]
    fn test_extract_symbolic_name(manifest: &str, expected: &str) {
        assert_eq!(extract_symbolic_name(manifest).as_deref(), Some(expected));
    }

    #[test]
    fn test_extract_from_full_manifest() {
        let manifest = "Manifest-Version: 1.0\n\
                        Bundle-ManifestVersion: 2\n\
                        Bundle-Name: CIMTool Builder\n\
                        Bundle-SymbolicName: au.com.langdale.cimtoole;singleton:=true\n\
                        Bundle-Version: 2.2.0.qualifier\n\
                        Require-Bundle: org.eclipse.ui,\n \
                        org.eclipse.core.runtime\n";

        assert_eq!(
            extract_symbolic_name(manifest).as_deref(),
            Some("au.com.langdale.cimtoole")
        );
    }

    #[test]
    fn test_wrapped_symbolic_name_is_reassembled() {
        let manifest = "Manifest-Version: 1.0\n\
                        Bundle-SymbolicName: au.com.langdale.cimtool.a.rather.long.bundle.na\n \
                        me;singleton:=true\n";

        assert_eq!(
            extract_symbolic_name(manifest).as_deref(),
            Some("au.com.langdale.cimtool.a.rather.long.bundle.name")
        );
    }

    #[test]
    fn test_value_on_continuation_line() {
        let manifest = "Bundle-SymbolicName:\n org.example.core\n";
        assert_eq!(
            extract_symbolic_name(manifest).as_deref(),
            Some("org.example.core")
        );
    }

    #[test]
    fn test_missing_header() {
        let manifest = "Manifest-Version: 1.0\nBundle-Name: Nothing here\n";
        assert_eq!(extract_symbolic_name(manifest), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(extract_symbolic_name("Bundle-SymbolicName:   \n"), None);
        assert_eq!(
            extract_symbolic_name("Bundle-SymbolicName: ;singleton:=true\n"),
            None
        );
    }

    #[test]
    fn test_header_name_is_exact() {
        assert_eq!(
            extract_symbolic_name("bundle-symbolicname: org.example.core\n"),
            None
        );
        assert_eq!(
            extract_symbolic_name("Bundle-SymbolicNameX: org.example.core\n"),
            None
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        let manifest = "Bundle-SymbolicName: org.example.first\n\
                        Bundle-SymbolicName: org.example.second\n";
        assert_eq!(
            extract_symbolic_name(manifest).as_deref(),
            Some("org.example.first")
        );
    }

    #[test]
    fn test_leading_blank_line() {
        let manifest = "\nManifest-Version: 1.0\nBundle-SymbolicName: org.foo.a\n";
        assert_eq!(extract_symbolic_name(manifest).as_deref(), Some("org.foo.a"));
    }

    #[test]
    fn test_blank_line_before_header() {
        let manifest = "Manifest-Version: 1.0\n\
                        \n\
                        Bundle-SymbolicName: org.foo.a;singleton:=true\n";
        assert_eq!(extract_symbolic_name(manifest).as_deref(), Some("org.foo.a"));
    }

    #[test]
    fn test_wrapped_header_after_blank_line() {
        let manifest = "Manifest-Version: 1.0\r\n\
                        \r\n\
                        Bundle-SymbolicName: org.foo.wr\r\n \
                        apped;singleton:=true\r\n";
        assert_eq!(
            extract_symbolic_name(manifest).as_deref(),
            Some("org.foo.wrapped")
        );
    }

    #[test]
    fn test_main_section_header_wins_over_entry_section() {
        let manifest = "Bundle-SymbolicName: org.example.main\n\
                        \n\
                        Name: org/example/Foo.class\n\
                        Bundle-SymbolicName: org.example.entry\n";

        assert_eq!(
            extract_symbolic_name(manifest).as_deref(),
            Some("org.example.main")
        );

        let parsed = parse_headers(manifest);
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.sections[0][0].0, "Name");
    }

    #[test]
    fn test_parse_headers_keeps_order() {
        let parsed = parse_headers("A: 1\nB: 2\nC: 3\n");
        let names: Vec<&str> = parsed.main.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(parsed.get("B"), Some("2"));
    }

    #[test]
    fn test_malformed_lines_are_ignored() {
        let parsed = parse_headers("garbage line\nBundle-SymbolicName: org.example.core\n");
        assert_eq!(parsed.get(SYMBOLIC_NAME_HEADER), Some("org.example.core"));
    }

    #[test]
    fn test_replacement_characters_do_not_break_parsing() {
        let text = String::from_utf8_lossy(
            b"Bundle-Vendor: Caf\xe9\nBundle-SymbolicName: org.example.core\n",
        )
        .into_owned();
        assert_eq!(
            extract_symbolic_name(&text).as_deref(),
            Some("org.example.core")
        );
    }

    #[test]
    fn test_unusual_name_is_still_returned() {
        assert!(!is_valid_symbolic_name("org.example..core"));
        assert_eq!(
            extract_symbolic_name("Bundle-SymbolicName: org.example..core\n").as_deref(),
            Some("org.example..core")
        );
    }

    #[test]
    fn test_is_valid_symbolic_name() {
        assert!(is_valid_symbolic_name("org.example.core"));
        assert!(is_valid_symbolic_name("org.example_1.core-ui"));
        assert!(is_valid_symbolic_name("single"));
        assert!(!is_valid_symbolic_name(".leading"));
        assert!(!is_valid_symbolic_name("trailing."));
        assert!(!is_valid_symbolic_name(""));
    }
}
