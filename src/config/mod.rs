// src/config/mod.rs

//! Project file loading and validation for taskshim.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a project file from disk (`loader.rs`).
//! - Validate flags and commands before any parsing happens (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, CONFIG_ENV_VAR};
pub use model::{ConfigFile, FlagEntry, ProjectSection, RawConfigFile};
