//! package.json inspection.
//!
//! Used by the pre-check that the target dependency is actually declared
//! before any file is parsed. Key order is preserved on load so diagnostics
//! list dependencies the way the manifest does.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::package::actual_version;

/// The slice of package.json depscan cares about.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDefinition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: Map<String, Value>,
    #[serde(default)]
    pub dev_dependencies: Map<String, Value>,
    #[serde(default)]
    pub peer_dependencies: Map<String, Value>,
}

impl ProjectDefinition {
    /// Look up the declared version requirement for a package across all
    /// three dependency tables, stripped of range operators.
    pub fn declared_version(&self, package: &str) -> Option<String> {
        [
            &self.dependencies,
            &self.dev_dependencies,
            &self.peer_dependencies,
        ]
        .into_iter()
        .find_map(|table| table.get(package))
        .and_then(Value::as_str)
        .map(|version| actual_version(version).to_string())
    }

    pub fn is_declared(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
            || self.dev_dependencies.contains_key(package)
            || self.peer_dependencies.contains_key(package)
    }
}

/// Load the project manifest from `root`.
///
/// A missing package.json means the directory is not a Node.js project,
/// which is a hard error for the CLI regardless of tolerance settings.
pub fn resolve_project(root: &Path) -> Result<ProjectDefinition> {
    let path = root.join("package.json");

    if !path.exists() {
        bail!(
            "{} is not a Node.js project directory (no package.json found)",
            root.display()
        );
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&raw).context("Invalid package.json schema")
}
