use anyhow::Result;

mod args;
mod exit_code;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_code::ExitStatus;
pub use run::{RunResult, ScanOutcome};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::Success)
}
