// src/dispatch.rs

//! Flag → command mapping.
//!
//! A project declares which command line each flag stands for. After parsing,
//! the table turns the `ArgumentSet` into the one `CommandSpec` handed to the
//! executor.

use tracing::debug;

use crate::cli::{ArgumentSet, FlagDescriptor};
use crate::config::ConfigFile;
use crate::exec::CommandSpec;

/// Separator used when more than one flag is present.
const CHAIN: &str = " && ";

#[derive(Debug, Clone, Default)]
pub struct FlagTable {
    entries: Vec<(FlagDescriptor, String)>,
}

impl FlagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag and the command it selects. Order matters: it is the order
    /// in which commands are chained.
    pub fn with_flag(mut self, descriptor: FlagDescriptor, command: impl Into<String>) -> Self {
        self.entries.push((descriptor, command.into()));
        self
    }

    pub fn descriptors(&self) -> Vec<FlagDescriptor> {
        self.entries.iter().map(|(d, _)| d.clone()).collect()
    }

    /// Pick the command line for this invocation.
    ///
    /// Commands of all present flags are joined with `&&` in declaration
    /// order, so the shell stops at the first failing step. No flags present
    /// means `CommandSpec::none()`.
    pub fn select(&self, args: &ArgumentSet) -> CommandSpec {
        let selected: Vec<&str> = self
            .entries
            .iter()
            .filter(|(desc, _)| args.is_set(&desc.long_name))
            .map(|(_, cmd)| cmd.as_str())
            .collect();

        if selected.is_empty() {
            debug!("no flag selected a command");
            return CommandSpec::none();
        }

        debug!(?selected, "commands selected by flags");
        CommandSpec::new(selected.join(CHAIN))
    }
}

impl From<&ConfigFile> for FlagTable {
    fn from(cfg: &ConfigFile) -> Self {
        cfg.flags().iter().fold(FlagTable::new(), |table, entry| {
            table.with_flag(entry.descriptor(), entry.command.clone())
        })
    }
}
