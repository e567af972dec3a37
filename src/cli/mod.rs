// src/cli/mod.rs

//! Argument schema registrar.
//!
//! Turns a list of [`FlagDescriptor`]s into a `clap` parser and matches it
//! against the process arguments, producing an [`ArgumentSet`].
//!
//! - [`descriptor`] holds the descriptor type and its validation rules.
//! - [`registrar`] builds the `clap::Command` and runs the parse.
//! - [`args`] is the parsed, read-only result.
//!
//! Nothing in here exits the process. Help requests and bad tokens come back
//! as [`TaskshimError::Parse`](crate::errors::TaskshimError::Parse) and the
//! entry point turns them into an exit.

pub mod args;
pub mod descriptor;
pub mod registrar;

pub use args::{ArgumentSet, LogLevel};
pub use descriptor::{normalize_key, validate_descriptors, FlagDescriptor};
pub use registrar::{register, Registrar};
