//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: find project files that depend on a package
//! - `init`: initialize the depscan configuration file
//! - `serve`: start the MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Parse every ECMAScript-family file as an ES module
    #[arg(short, long, conflicts_with = "script")]
    pub module: bool,

    /// Parse every ECMAScript-family file as a classic script
    #[arg(short = 'r', long)]
    pub script: bool,

    /// Skip unreadable and unparseable files instead of aborting
    #[arg(short, long)]
    pub silent: bool,

    /// Print the result as a table
    #[arg(short, long)]
    pub table: bool,

    /// Skip the package.json pre-check
    #[arg(long)]
    pub no_precheck: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Package name to search for
    pub package: String,

    /// Glob patterns of files to analyze, relative to the project root
    /// (default: every supported file outside node_modules)
    pub files: Vec<String>,

    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find project files that depend on a package
    Scan(ScanCommand),
    /// Initialize the depscan configuration file
    Init,
    /// Start the MCP server (stdio transport)
    Serve,
}
