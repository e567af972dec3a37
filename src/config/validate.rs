// src/config/validate.rs

use crate::cli::validate_descriptors;
use crate::config::model::{ConfigFile, FlagEntry, RawConfigFile};
use crate::errors::{Result, TaskshimError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::TaskshimError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.project, raw.flag))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_flag_schema(&cfg.flag)?;
    validate_commands(&cfg.flag)?;
    Ok(())
}

fn validate_flag_schema(flags: &[FlagEntry]) -> Result<()> {
    let descriptors: Vec<_> = flags.iter().map(FlagEntry::descriptor).collect();
    validate_descriptors(&descriptors)
}

fn validate_commands(flags: &[FlagEntry]) -> Result<()> {
    for entry in flags {
        if entry.command.trim().is_empty() {
            return Err(TaskshimError::Config(format!(
                "flag '{}' has an empty `command`",
                entry.long
            )));
        }
    }
    Ok(())
}
