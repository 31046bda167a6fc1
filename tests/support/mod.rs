//! Shared fixtures for integration tests

use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn get_tycho_pomgen_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("tycho-pomgen")
}

#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

#[allow(dead_code)]
pub fn add_plugin(root: &Path, module: &str, manifest: &str) -> PathBuf {
    write_file(root, &format!("{}/META-INF/MANIFEST.MF", module), manifest)
}

#[allow(dead_code)]
pub fn add_feature(root: &Path, module: &str, feature_xml: &str) -> PathBuf {
    write_file(root, &format!("{}/feature.xml", module), feature_xml)
}

#[allow(dead_code)]
pub const CUSTOM_POM: &str = "<project><artifactId>custom</artifactId></project>\n";

/// The canonical layout: `A` plugin, `B` feature, `C` hand-written pom, `docs` ignored
#[allow(dead_code)]
pub fn create_cimtool_layout(root: &Path) {
    add_plugin(
        root,
        "A",
        "Manifest-Version: 1.0\nBundle-SymbolicName: org.foo.a;singleton:=true\n",
    );
    add_feature(
        root,
        "B",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<feature id=\"org.foo.feature\" version=\"1.0.0\">\n</feature>\n",
    );
    write_file(root, "C/pom.xml", CUSTOM_POM);
    add_plugin(root, "docs", "Bundle-SymbolicName: org.foo.docs\n");
}
