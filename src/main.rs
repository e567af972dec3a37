// src/main.rs

use taskshim::cli::Registrar;
use taskshim::config::{default_config_path, load_and_validate, ProjectSection};
use taskshim::dispatch::FlagTable;
use taskshim::errors::{exit_code_for_error, Result, TaskshimError};
use taskshim::exec::Executor;
use taskshim::{logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(TaskshimError::Parse(err)) => {
            // clap renders help to stdout and usage errors to stderr.
            if err.print().is_err() {
                eprintln!("{err}");
            }
            err.exit_code()
        }
        Err(err) => {
            eprintln!("taskshim error: {err}");
            exit_code_for_error(&err)
        }
    };
    std::process::exit(code);
}

async fn run_main() -> Result<i32> {
    let cfg = match load_and_validate(default_config_path()) {
        Ok(cfg) => cfg,
        Err(err) => return Err(help_without_project(err)),
    };
    let table = FlagTable::from(&cfg);

    let registrar = Registrar::new(&table.descriptors(), &cfg.project.description)?;
    let args = registrar.parse_env()?;
    logging::init_logging(args.log_level())?;

    let mut executor = Executor::new();
    let result = run(&table, &args, &mut executor).await?;
    Ok(result.process_exit_code())
}

/// `-h`/`--help` must work even when the project file is missing or broken.
///
/// Parses argv against the built-in options only; a help request replaces the
/// project error, anything else keeps it.
fn help_without_project(project_err: TaskshimError) -> TaskshimError {
    let description = ProjectSection::default().description;
    let Ok(registrar) = Registrar::new(&[], &description) else {
        return project_err;
    };
    match registrar.parse_env() {
        Err(TaskshimError::Parse(err)) if err.kind() == clap::error::ErrorKind::DisplayHelp => {
            TaskshimError::Parse(err)
        }
        _ => project_err,
    }
}
