use std::{fs, path::PathBuf, process::Command};

use anyhow::{Context, Ok, Result};
use tempfile::TempDir;

mod init;
mod scan;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A test project whose package.json declares the given dependencies.
    pub fn with_dependencies(dependencies: &[(&str, &str)]) -> Result<Self> {
        let test = Self::new()?;

        let entries: Vec<String> = dependencies
            .iter()
            .map(|(name, version)| format!("\"{}\": \"{}\"", name, version))
            .collect();
        test.write_file(
            "package.json",
            &format!(
                "{{\n  \"name\": \"fixture\",\n  \"dependencies\": {{ {} }}\n}}\n",
                entries.join(", ")
            ),
        )?;

        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_depscan"));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn scan_command(&self, package: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("scan").arg(package);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command and capture (exit code, stdout, stderr).
pub fn run(cmd: &mut Command) -> (i32, String, String) {
    let output = cmd.output().expect("failed to run depscan binary");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
