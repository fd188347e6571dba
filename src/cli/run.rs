//! Command dispatch for the CLI.

use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::args::{Arguments, Command, ScanCommand};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::core::{MatchResult, ScanOptions, SourceMode, find_dependants, scanner::discover_files};
use crate::project::resolve_project;

/// Everything the reporter needs to render one scan.
pub struct ScanOutcome {
    pub dependency: String,
    pub declared_version: Option<String>,
    pub results: Vec<MatchResult>,
    pub files_scanned: usize,
    pub table: bool,
}

pub enum RunResult {
    Scan(ScanOutcome),
    Init { created: bool },
}

pub fn run(Arguments { command }: Arguments) -> Result<RunResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(RunResult::Init { created: true })
        }
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn scan(cmd: ScanCommand) -> Result<RunResult> {
    let args = &cmd.args;
    let root = &args.common.root;
    let verbose = args.common.verbose;

    let config_result = load_config(root)?;
    if verbose && !config_result.from_file {
        eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
    }
    let config = config_result.config;

    // CLI flags win over the config file.
    let tolerant = args.silent || config.silent;
    let table = args.table || config.table;
    let patterns = if cmd.files.is_empty() {
        config.files.clone()
    } else {
        cmd.files.clone()
    };
    let force_mode = if args.module {
        Some(SourceMode::Module)
    } else if args.script {
        Some(SourceMode::Script)
    } else {
        None
    };

    let declared_version = if config.precheck && !args.no_precheck {
        let project = resolve_project(root)?;
        if !project.is_declared(&cmd.package) {
            bail!(
                "'{}' is not declared in this project's package.json",
                cmd.package
            );
        }
        project.declared_version(&cmd.package)
    } else {
        None
    };

    let files = discover_files(root, &patterns, &config.ignores, tolerant, verbose)?;
    let files_scanned = files.len();

    let options = ScanOptions {
        tolerant,
        force_mode,
    };
    let results = find_dependants(&files, &cmd.package, options)?;

    Ok(RunResult::Scan(ScanOutcome {
        dependency: cmd.package,
        declared_version,
        results,
        files_scanned,
        table,
    }))
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
