// src/cli/descriptor.rs

use std::collections::HashSet;

use crate::errors::{Result, TaskshimError};

/// Short flags owned by the parser itself.
pub const RESERVED_SHORT: &[char] = &['h'];

/// Normalized keys owned by the parser itself (`--help`, `--log-level`,
/// `--dry-run`).
pub const RESERVED_KEYS: &[&str] = &["help", "log_level", "dry_run"];

/// One optional boolean switch, e.g. `-b` / `--build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDescriptor {
    /// `-` followed by a single ASCII alphanumeric character.
    pub short_flag: String,

    /// `--` followed by `[A-Za-z0-9_-]+`, starting with an alphanumeric.
    pub long_name: String,

    pub help_text: String,
}

impl FlagDescriptor {
    pub fn new(
        short_flag: impl Into<String>,
        long_name: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Self {
        Self {
            short_flag: short_flag.into(),
            long_name: long_name.into(),
            help_text: help_text.into(),
        }
    }

    /// Key under which this flag appears in an `ArgumentSet`.
    pub fn key(&self) -> String {
        normalize_key(&self.long_name)
    }

    /// The short switch character, if the descriptor is well formed.
    pub fn short_char(&self) -> Option<char> {
        let mut chars = self.short_flag.strip_prefix('-')?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        }
    }

    /// The long name without its `--` prefix, if the descriptor is well formed.
    pub fn long_body(&self) -> Option<&str> {
        let body = self.long_name.strip_prefix("--")?;
        let first = body.chars().next()?;
        if !first.is_ascii_alphanumeric() {
            return None;
        }
        if body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            Some(body)
        } else {
            None
        }
    }
}

/// Strip leading dashes and turn the remaining dashes into underscores.
///
/// `--run-tests` and `run-tests` both become `run_tests`.
pub fn normalize_key(name: &str) -> String {
    name.trim_start_matches('-').replace('-', "_")
}

/// Check a registration set before any parser is built.
///
/// Rejects malformed descriptors, duplicates on the short flag, the long
/// name or the normalized key, and anything that shadows a built-in option.
pub fn validate_descriptors(descriptors: &[FlagDescriptor]) -> Result<()> {
    let mut shorts = HashSet::new();
    let mut longs = HashSet::new();
    let mut keys = HashSet::new();

    for desc in descriptors {
        let short = desc.short_char().ok_or_else(|| {
            TaskshimError::Schema(format!(
                "short flag '{}' (for '{}') must be '-' followed by one alphanumeric character",
                desc.short_flag, desc.long_name
            ))
        })?;
        let long = desc.long_body().ok_or_else(|| {
            TaskshimError::Schema(format!(
                "long flag '{}' must be '--' followed by letters, digits, '-' or '_'",
                desc.long_name
            ))
        })?;
        let key = normalize_key(long);

        if RESERVED_SHORT.contains(&short) || RESERVED_KEYS.contains(&key.as_str()) {
            return Err(TaskshimError::Schema(format!(
                "flag '{}' / '{}' collides with a built-in option",
                desc.short_flag, desc.long_name
            )));
        }
        if !shorts.insert(short) {
            return Err(TaskshimError::Schema(format!(
                "duplicate short flag '{}'",
                desc.short_flag
            )));
        }
        if !longs.insert(long.to_string()) {
            return Err(TaskshimError::Schema(format!(
                "duplicate long flag '{}'",
                desc.long_name
            )));
        }
        if !keys.insert(key.clone()) {
            return Err(TaskshimError::Schema(format!(
                "long flag '{}' normalizes to '{}', which is already registered",
                desc.long_name, key
            )));
        }
    }

    Ok(())
}
