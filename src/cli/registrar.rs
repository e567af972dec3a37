// src/cli/registrar.rs

use std::collections::BTreeMap;
use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, value_parser};
use tracing::debug;

use super::args::{ArgumentSet, LogLevel};
use super::descriptor::{validate_descriptors, FlagDescriptor};
use crate::errors::{Result, TaskshimError};

const LOG_LEVEL_ID: &str = "log_level";
const DRY_RUN_ID: &str = "dry_run";

/// A validated flag schema with its `clap` parser.
///
/// Building one can only fail with a schema error; parsing can only fail with
/// a parse error (which includes `--help`).
#[derive(Debug, Clone)]
pub struct Registrar {
    descriptors: Vec<FlagDescriptor>,
    command: Command,
}

impl Registrar {
    /// Validate `descriptors` and build the parser.
    ///
    /// `description` only shows up in help output.
    pub fn new(descriptors: &[FlagDescriptor], description: &str) -> Result<Self> {
        validate_descriptors(descriptors)?;

        let mut command = Command::new(env!("CARGO_PKG_NAME"))
            .about(description.to_string())
            .arg(
                Arg::new(LOG_LEVEL_ID)
                    .long("log-level")
                    .value_name("LEVEL")
                    .value_parser(value_parser!(LogLevel))
                    .help("Logging level (error, warn, info, debug, trace)"),
            )
            .arg(
                Arg::new(DRY_RUN_ID)
                    .long("dry-run")
                    .action(ArgAction::SetTrue)
                    .help("Print the selected command instead of running it"),
            );

        for desc in descriptors {
            // Unreachable after `validate_descriptors`.
            let (Some(short), Some(long)) = (desc.short_char(), desc.long_body()) else {
                return Err(TaskshimError::Schema(format!(
                    "malformed flag descriptor '{}'",
                    desc.long_name
                )));
            };
            command = command.arg(
                Arg::new(desc.key())
                    .short(short)
                    .long(long.to_string())
                    .action(ArgAction::SetTrue)
                    .help(desc.help_text.clone()),
            );
        }

        Ok(Self {
            descriptors: descriptors.to_vec(),
            command,
        })
    }

    pub fn descriptors(&self) -> &[FlagDescriptor] {
        &self.descriptors
    }

    /// Match the schema against an argument vector.
    ///
    /// `argv[0]` is the program name, as with `std::env::args_os()`.
    pub fn parse_from<I, T>(&self, argv: I) -> Result<ArgumentSet>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .clone()
            .try_get_matches_from(argv)
            .map_err(TaskshimError::Parse)?;

        let flags: BTreeMap<String, bool> = self
            .descriptors
            .iter()
            .map(|desc| {
                let key = desc.key();
                let value = matches.get_flag(&key);
                (key, value)
            })
            .collect();

        let log_level = matches.get_one::<LogLevel>(LOG_LEVEL_ID).copied();
        let dry_run = matches.get_flag(DRY_RUN_ID);

        debug!(?flags, ?log_level, dry_run, "parsed command-line flags");

        Ok(ArgumentSet::new(flags, log_level, dry_run))
    }

    /// Parse the current process arguments.
    pub fn parse_env(&self) -> Result<ArgumentSet> {
        self.parse_from(std::env::args_os())
    }

    /// Rendered `--help` text.
    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }
}

/// Validate `descriptors`, build the parser and parse `argv` in one go.
pub fn register<I, T>(descriptors: &[FlagDescriptor], description: &str, argv: I) -> Result<ArgumentSet>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Registrar::new(descriptors, description)?.parse_from(argv)
}
