// src/cli/args.rs

use std::collections::BTreeMap;

use clap::ValueEnum;

use super::descriptor::normalize_key;

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parsed flags for one invocation.
///
/// Every registered flag has an entry; absent flags are `false`. The set is
/// never modified after the registrar hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSet {
    flags: BTreeMap<String, bool>,
    log_level: Option<LogLevel>,
    dry_run: bool,
}

impl ArgumentSet {
    pub(crate) fn new(
        flags: BTreeMap<String, bool>,
        log_level: Option<LogLevel>,
        dry_run: bool,
    ) -> Self {
        Self {
            flags,
            log_level,
            dry_run,
        }
    }

    /// Value of a registered flag, or `None` if no such flag was registered.
    ///
    /// Accepts the normalized key (`run_tests`) as well as the long name
    /// (`--run-tests`).
    pub fn get(&self, name: &str) -> Option<bool> {
        self.flags.get(&normalize_key(name)).copied()
    }

    /// `true` iff the flag was registered and present on the command line.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    /// All registered flags in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// `--log-level`, if given.
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_level
    }

    /// `--dry-run`: report the selected command instead of running it.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
