//! Ensures all workspace crates use `version.workspace = true` and that
//! the workspace version is consistent across all Cargo.toml files.

use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn read_toml(path: &Path) -> toml::Value {
    let text = std::fs::read_to_string(path).unwrap();
    text.parse().unwrap()
}

/// Read the workspace version from the root Cargo.toml.
fn workspace_version() -> String {
    let doc = read_toml(&workspace_root().join("Cargo.toml"));
    doc["workspace"]["package"]["version"]
        .as_str()
        .unwrap()
        .to_string()
}

fn workspace_members() -> Vec<String> {
    let doc = read_toml(&workspace_root().join("Cargo.toml"));
    doc["workspace"]["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn all_crates_use_workspace_version() {
    let root = workspace_root();
    for member in workspace_members() {
        let doc = read_toml(&root.join(&member).join("Cargo.toml"));
        let uses_workspace = doc["package"]["version"]
            .as_table()
            .and_then(|t| t.get("workspace"))
            .and_then(|v| v.as_bool())
            == Some(true);
        assert!(
            uses_workspace,
            "{member} should use version.workspace = true"
        );
    }
}

#[test]
fn internal_dependency_versions_match_workspace() {
    let doc = read_toml(&workspace_root().join("Cargo.toml"));
    let ws_version = workspace_version();
    let deps = doc["workspace"]["dependencies"].as_table().unwrap();
    for (name, dep) in deps.iter().filter(|(name, _)| name.starts_with("testgen")) {
        assert_eq!(
            dep["version"].as_str(),
            Some(ws_version.as_str()),
            "workspace dependency {name} pins a different version"
        );
    }
}

#[test]
fn workspace_version_matches_cargo_pkg() {
    let ws_version = workspace_version();
    let pkg_version = env!("CARGO_PKG_VERSION");
    assert_eq!(
        ws_version, pkg_version,
        "workspace version ({}) != CARGO_PKG_VERSION ({})",
        ws_version, pkg_version
    );
}
