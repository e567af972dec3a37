// src/exec/command.rs

use std::fmt;
use std::process::ExitStatus;

/// The command line chosen for this invocation, if any.
///
/// The string is handed to the shell untouched; `&&` chains and `cd` are the
/// shell's business. `None` and blank strings both mean "nothing to run".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    line: Option<String>,
}

impl CommandSpec {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: Some(line.into()),
        }
    }

    pub fn none() -> Self {
        Self { line: None }
    }

    /// The command line to run, or `None` for a no-op.
    pub fn as_command_line(&self) -> Option<&str> {
        self.line.as_deref().filter(|l| !l.trim().is_empty())
    }

    pub fn is_noop(&self) -> bool {
        self.as_command_line().is_none()
    }
}

impl From<Option<String>> for CommandSpec {
    fn from(line: Option<String>) -> Self {
        Self { line }
    }
}

impl From<&str> for CommandSpec {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_command_line() {
            Some(line) => f.write_str(line),
            None => f.write_str("<none>"),
        }
    }
}

/// How one `Executor::run` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub succeeded: bool,
}

impl ExecutionResult {
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            succeeded: exit_code == 0,
        }
    }

    /// Result of running nothing.
    pub fn noop() -> Self {
        Self::from_exit_code(0)
    }

    /// Map a child's exit status to a result.
    ///
    /// A Unix child killed by a signal has no exit code and is reported as
    /// `128 + signal`, the way shells report it.
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::from_exit_code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::from_exit_code(128 + signal);
            }
        }

        Self::from_exit_code(-1)
    }

    /// Terminal executor state for this result.
    pub fn state(&self) -> ExecState {
        if self.succeeded {
            ExecState::Succeeded
        } else {
            ExecState::Failed
        }
    }

    /// Exit code for this process so CI sees the same outcome.
    ///
    /// Failures keep the child's code when it fits in `1..=255`, anything
    /// else becomes `1`.
    pub fn process_exit_code(&self) -> i32 {
        match self.exit_code {
            0 => 0,
            code @ 1..=255 => code,
            _ => 1,
        }
    }
}

/// Lifecycle of a single `run` call.
///
/// `Idle -> Running -> {Succeeded, Failed}`; a no-op call goes straight from
/// `Idle` to `Succeeded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl ExecState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ExecState::Succeeded | ExecState::Failed)
    }

    pub fn can_transition_to(self, next: ExecState) -> bool {
        matches!(
            (self, next),
            (ExecState::Idle, ExecState::Running)
                | (ExecState::Idle, ExecState::Succeeded)
                | (ExecState::Running, ExecState::Succeeded)
                | (ExecState::Running, ExecState::Failed)
        )
    }
}
