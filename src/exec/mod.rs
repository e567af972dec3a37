// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the single command line selected for this invocation through the host
//! shell, with the parent's stdio handed to the child, and reports how it
//! exited.
//!
//! - [`command`] defines `CommandSpec`, `ExecutionResult` and the executor
//!   state machine.
//! - [`backend`] provides the `ProcessBackend` trait and the real
//!   `ShellBackend`; tests swap in a fake that counts spawns.
//! - [`executor`] owns the `run` contract (no-op handling, logging, result
//!   mapping) on top of a backend.

pub mod backend;
pub mod command;
pub mod executor;

pub use backend::{ProcessBackend, ShellBackend};
pub use command::{CommandSpec, ExecState, ExecutionResult};
pub use executor::Executor;
