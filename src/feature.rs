//! Eclipse `feature.xml` identifier extraction

use regex::Regex;
use roxmltree::{Document, ParsingOptions};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Returns the `id` attribute of the first `<feature>` element.
///
/// Well-formed documents go through `roxmltree`. Documents it rejects are scanned
/// for the first `<feature ...>` opening tag instead, so hand-edited files with
/// stray markup elsewhere still yield their id.
pub fn extract_feature_id(text: &str) -> Option<String> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    match Document::parse_with_options(text, options) {
        Ok(doc) => doc
            .descendants()
            .find(|node| node.is_element() && node.tag_name().name() == "feature")
            .and_then(|node| node.attribute("id"))
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        Err(e) => {
            warn!(error = %e, "feature.xml is not well-formed, scanning for the <feature> tag");
            scan_feature_tag(text)
        }
    }
}

fn scan_feature_tag(text: &str) -> Option<String> {
    static FEATURE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    static ID_ATTR_REGEX: OnceLock<Regex> = OnceLock::new();

    let tag_re = FEATURE_TAG_REGEX
        .get_or_init(|| Regex::new(r"<feature(\s[^>]*)>").expect("Invalid feature tag regex"));
    let id_re = ID_ATTR_REGEX.get_or_init(|| {
        Regex::new(r#"(?:^|\s)id\s*=\s*(?:"([^"]+)"|'([^']+)')"#).expect("Invalid id attribute regex")
    });

    let attrs = tag_re.captures(text)?.get(1)?.as_str();
    let caps = id_re.captures(attrs)?;
    let id = caps.get(1).or_else(|| caps.get(2))?.as_str();

    debug!(feature_id = id, "Recovered feature id from tag scan");
    Some(id.to_string())
}
