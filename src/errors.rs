// src/errors.rs

//! Crate-wide error type.
//!
//! A failing *command* is not an error: it comes back as an
//! [`ExecutionResult`](crate::exec::ExecutionResult) with `succeeded == false`.
//! Everything here is either an integrator mistake (schema, config) or a user
//! mistake (parse), and the entry point decides how the process exits.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskshimError {
    #[error("Flag schema error: {0}")]
    Schema(String),

    /// Unrecognized token or help request. Carries clap's rendered message
    /// and exit code.
    #[error("{0}")]
    Parse(#[from] clap::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to spawn shell for command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskshimError>;

/// Exit code for the process when `err` reaches the entry point.
///
/// Parse errors use clap's code (`0` for `--help`, `2` for usage errors);
/// everything else is `1`.
pub fn exit_code_for_error(err: &TaskshimError) -> i32 {
    match err {
        TaskshimError::Parse(e) => e.exit_code(),
        _ => 1,
    }
}
