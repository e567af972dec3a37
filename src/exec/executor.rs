// src/exec/executor.rs

use tracing::{debug, error, info};

use crate::errors::Result;

use super::backend::{ProcessBackend, ShellBackend};
use super::command::{CommandSpec, ExecState, ExecutionResult};

/// Runs at most one command per call and reports how it went.
///
/// The executor keeps no state between calls; each `run` starts from
/// `ExecState::Idle`.
#[derive(Debug, Default)]
pub struct Executor<B = ShellBackend> {
    backend: B,
}

impl Executor<ShellBackend> {
    pub fn new() -> Self {
        Self {
            backend: ShellBackend::new(),
        }
    }
}

impl<B: ProcessBackend> Executor<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run `command` to completion.
    ///
    /// - No-op specs return `{0, true}` without touching the backend.
    /// - Otherwise exactly one process is spawned and awaited; its exit code
    ///   becomes the result. A non-zero exit is `Ok`, not `Err`.
    pub async fn run(&mut self, command: &CommandSpec) -> Result<ExecutionResult> {
        let state = ExecState::Idle;

        let Some(line) = command.as_command_line() else {
            debug!("no command selected; nothing to run");
            advance(state, ExecState::Succeeded);
            return Ok(ExecutionResult::noop());
        };

        let state = advance(state, ExecState::Running);
        info!(cmd = %line, "starting command");

        let code = match self.backend.spawn_and_wait(line).await {
            Ok(code) => code,
            Err(err) => {
                error!(cmd = %line, error = %err, "command could not be run");
                return Err(err);
            }
        };

        let result = ExecutionResult::from_exit_code(code);
        advance(state, result.state());

        info!(
            cmd = %line,
            exit_code = result.exit_code,
            success = result.succeeded,
            "command exited"
        );

        Ok(result)
    }
}

fn advance(from: ExecState, to: ExecState) -> ExecState {
    debug_assert!(
        from.can_transition_to(to),
        "invalid executor transition {from:?} -> {to:?}"
    );
    debug!(?from, ?to, "executor state");
    to
}
