// src/lib.rs

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod exec;
pub mod logging;

use tracing::info;

use crate::cli::ArgumentSet;
use crate::dispatch::FlagTable;
use crate::errors::Result;
use crate::exec::{Executor, ExecutionResult, ProcessBackend};

/// High-level entry point used by `main.rs`, once flags are parsed.
///
/// Selects the command for `args` from `table` and runs it on `executor`.
/// With `--dry-run` the selected command is printed to stdout and nothing is
/// spawned.
pub async fn run<B: ProcessBackend>(
    table: &FlagTable,
    args: &ArgumentSet,
    executor: &mut Executor<B>,
) -> Result<ExecutionResult> {
    let command = table.select(args);

    if args.dry_run() {
        print_dry_run(args, &command.to_string());
        return Ok(ExecutionResult::noop());
    }

    let result = executor.run(&command).await?;
    if !result.succeeded {
        info!(
            exit_code = result.exit_code,
            "command failed; propagating its exit code"
        );
    }
    Ok(result)
}

/// Simple dry-run output: flag values and the command that would run.
fn print_dry_run(args: &ArgumentSet, command: &str) {
    println!("taskshim dry-run");
    println!("flags ({}):", args.len());
    for (name, value) in args.iter() {
        println!("  - {name} = {value}");
    }
    println!("command: {command}");
}
