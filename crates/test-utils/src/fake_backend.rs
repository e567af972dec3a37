use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use taskshim::errors::{Result, TaskshimError};
use taskshim::exec::ProcessBackend;

/// A process backend that never spawns anything:
/// - records every command line it was asked to run (the spawn-count probe)
/// - answers with scripted exit codes, falling back to a default
/// - can simulate a shell that fails to start.
///
/// Clones share the same record, so a test can keep one clone and hand the
/// other to an `Executor`.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    spawned: Arc<Mutex<Vec<String>>>,
    scripted: Arc<Mutex<VecDeque<i32>>>,
    default_exit_code: i32,
    fail_to_spawn: bool,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit code used once the scripted codes run out.
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.default_exit_code = code;
        self
    }

    /// Exit codes returned by successive spawns, in order.
    pub fn with_exit_codes(self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.scripted.lock().unwrap().extend(codes);
        self
    }

    /// Every spawn fails as if the shell binary were missing.
    pub fn failing_to_spawn(mut self) -> Self {
        self.fail_to_spawn = true;
        self
    }

    pub fn spawn_count(&self) -> usize {
        self.spawned.lock().unwrap().len()
    }

    pub fn spawned(&self) -> Vec<String> {
        self.spawned.lock().unwrap().clone()
    }
}

impl ProcessBackend for FakeBackend {
    fn spawn_and_wait<'a>(
        &'a mut self,
        command_line: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_to_spawn {
                return Err(TaskshimError::Spawn {
                    command: command_line.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "shell not found"),
                });
            }

            self.spawned.lock().unwrap().push(command_line.to_string());
            let code = self
                .scripted
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(self.default_exit_code);
            Ok(code)
        })
    }
}
