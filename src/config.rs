use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".depscanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for the files to analyze. Empty means "walk the whole
    /// project for supported files".
    #[serde(default)]
    pub files: Vec<String>,
    /// Glob patterns excluded from project walks.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Skip unreadable and unparseable files instead of aborting.
    #[serde(default)]
    pub silent: bool,
    /// Print results as a table.
    #[serde(default)]
    pub table: bool,
    /// Verify the dependency is declared in package.json before scanning.
    #[serde(default = "default_precheck")]
    pub precheck: bool,
}

fn default_ignores() -> Vec<String> {
    ["dist/**", "build/**", "coverage/**"]
        .map(String::from)
        .to_vec()
}

fn default_precheck() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            ignores: default_ignores(),
            silent: false,
            table: false,
            precheck: default_precheck(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `files` or `ignores` is
    /// invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in self.files.iter().chain(self.ignores.iter()) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// True if the config came from a file, false if defaults were used.
    pub from_file: bool,
}

/// Load configuration from `dir`, falling back to defaults when no config
/// file exists.
pub fn load_config(dir: &Path) -> Result<ConfigResult> {
    let path = dir.join(CONFIG_FILE_NAME);

    if !path.exists() {
        return Ok(ConfigResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    config.validate()?;

    Ok(ConfigResult {
        config,
        from_file: true,
    })
}

/// Default configuration serialized for `depscan init`.
pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to serialize default config")
}
