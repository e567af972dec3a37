// tests/config_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;
use taskshim::config::{load_and_validate, load_from_path, ConfigFile};
use taskshim::errors::TaskshimError;
use taskshim_test_utils::builders::ConfigFileBuilder;

fn project_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn loads_description_and_flags_in_order() {
    let file = project_file(
        r#"
[project]
description = "Execute feature tests"

[[flag]]
short = "-b"
long = "--build"
help = "Build the software."
command = "cd demos/stm32 && cargo build"

[[flag]]
short = "-t"
long = "--test"
command = "cargo test"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.project.description, "Execute feature tests");
    assert_eq!(cfg.flags().len(), 2);
    assert_eq!(cfg.flags()[0].command, "cd demos/stm32 && cargo build");
    assert_eq!(cfg.flags()[1].help, "");

    let descriptors = cfg.descriptors();
    assert_eq!(descriptors[0].short_flag, "-b");
    assert_eq!(descriptors[1].key(), "test");
}

#[test]
fn empty_file_is_valid_and_has_no_flags() {
    let file = project_file("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert!(cfg.flags().is_empty());
    assert!(!cfg.project.description.is_empty());
}

#[test]
fn duplicate_flag_in_file_is_schema_error() {
    let file = project_file(
        r#"
[[flag]]
short = "-b"
long = "--build"
command = "cargo build"

[[flag]]
short = "-b"
long = "--bench"
command = "cargo bench"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskshimError::Schema(msg)) => assert!(msg.contains("-b")),
        Err(e) => panic!("Expected Schema error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }

    // The raw loader does not validate.
    assert_eq!(load_from_path(file.path()).unwrap().flag.len(), 2);
}

#[test]
fn blank_command_is_config_error() {
    let file = project_file(
        r#"
[[flag]]
short = "-b"
long = "--build"
command = "  "
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskshimError::Config(msg)) => assert!(msg.contains("--build")),
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_command_key_is_toml_error() {
    let file = project_file(
        r#"
[[flag]]
short = "-b"
long = "--build"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskshimError::Toml(_))
    ));
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Taskshim.toml");

    match load_and_validate(&path) {
        Err(TaskshimError::Config(msg)) => assert!(msg.contains("cannot read project file")),
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn reserved_flag_in_raw_config_fails_conversion() {
    let raw = ConfigFileBuilder::new()
        .with_flag("-d", "--dry-run", "Shadows the built-in", "echo nope")
        .raw();

    match ConfigFile::try_from(raw) {
        Err(TaskshimError::Schema(msg)) => assert!(msg.contains("built-in")),
        Err(e) => panic!("Expected Schema error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
