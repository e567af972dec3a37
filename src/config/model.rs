// src/config/model.rs

use serde::Deserialize;

use crate::cli::FlagDescriptor;

/// Project file as read from TOML, before validation.
///
/// ```toml
/// [project]
/// description = "Execute feature tests"
///
/// [[flag]]
/// short = "-b"
/// long = "--build"
/// help = "Build the software."
/// command = "cd demos/stm32 && cargo build"
/// ```
///
/// Both sections are optional; a file with no `[[flag]]` entries still
/// parses and simply never runs anything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub project: ProjectSection,

    /// `[[flag]]` entries, in declaration order.
    #[serde(default)]
    pub flag: Vec<FlagEntry>,
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Shown at the top of `--help`.
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_description() -> String {
    "Run project build and test commands.".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            description: default_description(),
        }
    }
}

/// One `[[flag]]` entry: a switch and the command line it selects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlagEntry {
    pub short: String,
    pub long: String,
    #[serde(default)]
    pub help: String,
    pub command: String,
}

impl FlagEntry {
    pub fn descriptor(&self) -> FlagDescriptor {
        FlagDescriptor::new(&self.short, &self.long, &self.help)
    }
}

/// A validated project file.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, so every instance has
/// a well-formed, collision-free flag set and non-blank commands.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub project: ProjectSection,
    flags: Vec<FlagEntry>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(project: ProjectSection, flags: Vec<FlagEntry>) -> Self {
        Self { project, flags }
    }

    pub fn flags(&self) -> &[FlagEntry] {
        &self.flags
    }

    pub fn descriptors(&self) -> Vec<FlagDescriptor> {
        self.flags.iter().map(FlagEntry::descriptor).collect()
    }
}
