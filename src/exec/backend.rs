// src/exec/backend.rs

//! Pluggable process backend.
//!
//! The [`Executor`](super::Executor) talks to a `ProcessBackend` instead of
//! `tokio::process` directly, so tests can provide a backend that records
//! what would have been spawned and returns scripted exit codes.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{Result, TaskshimError};

use super::command::ExecutionResult;

/// Trait abstracting how a command line is turned into a finished process.
pub trait ProcessBackend: Send {
    /// Spawn one process for `command_line`, wait for it, and return its exit
    /// code.
    ///
    /// A non-zero exit is a normal return value. `Err` is reserved for the
    /// process not starting (or not being waitable) at all.
    fn spawn_and_wait<'a>(
        &'a mut self,
        command_line: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>>;
}

/// Real backend: `sh -c` on Unix, `cmd /C` on Windows, with stdin, stdout
/// and stderr inherited so tool output shows up live.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellBackend;

impl ShellBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Build a shell command appropriate for the platform.
///
/// `cmd` does its own parsing of the rest of its command line, so the string
/// is passed raw instead of being quoted as a single argument.
#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut c = Command::new("cmd");
    c.arg("/C").raw_arg(command_line);
    c
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(command_line);
    c
}

impl ProcessBackend for ShellBackend {
    fn spawn_and_wait<'a>(
        &'a mut self,
        command_line: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>> {
        Box::pin(async move {
            let mut cmd = shell_command(command_line);
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            let mut child = cmd.spawn().map_err(|source| TaskshimError::Spawn {
                command: command_line.to_string(),
                source,
            })?;

            debug!(pid = child.id(), "child process spawned");

            let status = child.wait().await?;
            Ok(ExecutionResult::from_status(status).exit_code)
        })
    }
}
