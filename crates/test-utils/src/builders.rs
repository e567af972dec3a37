#![allow(dead_code)]

use taskshim::cli::FlagDescriptor;
use taskshim::config::{ConfigFile, FlagEntry, ProjectSection, RawConfigFile};

/// Shorthand for a descriptor in tests.
pub fn flag(short: &str, long: &str, help: &str) -> FlagDescriptor {
    FlagDescriptor::new(short, long, help)
}

/// `argv` with a program name in front, as `std::env::args_os()` would give.
pub fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("taskshim")
        .chain(args.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                project: ProjectSection::default(),
                flag: Vec::new(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.config.project.description = description.to_string();
        self
    }

    pub fn with_flag(mut self, short: &str, long: &str, help: &str, command: &str) -> Self {
        self.config.flag.push(FlagEntry {
            short: short.to_string(),
            long: long.to_string(),
            help: help.to_string(),
            command: command.to_string(),
        });
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
