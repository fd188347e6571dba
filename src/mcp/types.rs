use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::MatchResult;

// ============================================================
// Scan Types (scan_dependency)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanDependencyParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
    /// Package name to search for
    pub package: String,
    /// Glob patterns restricting the files to analyze (default: every
    /// supported file outside node_modules)
    #[serde(default)]
    pub files: Option<Vec<String>>,
    /// Skip unreadable and unparseable files instead of failing the scan
    #[serde(default)]
    pub silent: Option<bool>,
}

/// One file that imports the target dependency.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependantFile {
    pub name: String,
    pub path: String,
    /// 1-indexed line numbers, ascending.
    pub line_numbers: Vec<usize>,
}

impl From<MatchResult> for DependantFile {
    fn from(result: MatchResult) -> Self {
        Self {
            name: result.name,
            path: result.path,
            line_numbers: result.line_numbers,
        }
    }
}

/// Result of scan_dependency operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanDependencyResult {
    pub dependency: String,
    /// Declared version requirement from package.json, if the pre-check ran.
    pub declared_version: Option<String>,
    pub total_count: usize,
    pub files_scanned: usize,
    pub files: Vec<DependantFile>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub files: Vec<String>,
    pub ignores: Vec<String>,
    pub silent: bool,
    pub table: bool,
    pub precheck: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            files: c.files,
            ignores: c.ignores,
            silent: c.silent,
            table: c.table,
            precheck: c.precheck,
        }
    }
}
