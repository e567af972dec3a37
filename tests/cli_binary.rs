// tests/cli_binary.rs
//
// Drives the compiled binary the way a CI job would and checks exit codes.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const PROJECT: &str = r#"
[project]
description = "Execute feature tests"

[[flag]]
short = "-b"
long = "--build"
help = "Build the software."
command = "echo built"

[[flag]]
short = "-f"
long = "--fail"
help = "Always fails."
command = "exit 7"
"#;

fn project_dir(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Taskshim.toml"), contents).unwrap();
    dir
}

fn taskshim(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taskshim"))
        .args(args)
        .current_dir(dir)
        .env_remove("TASKSHIM_CONFIG")
        .env("TASKSHIM_LOG", "error")
        .output()
        .unwrap()
}

#[test]
fn no_flags_is_a_successful_noop() {
    let dir = project_dir(PROJECT);
    let out = taskshim(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn selected_command_output_is_visible() {
    let dir = project_dir(PROJECT);
    let out = taskshim(dir.path(), &["--build"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "built");
}

#[test]
fn failing_command_exit_code_is_propagated() {
    let dir = project_dir(PROJECT);
    let out = taskshim(dir.path(), &["-f"]);

    assert_eq!(out.status.code(), Some(7));
}

#[test]
fn help_exits_zero_and_lists_flags() {
    let dir = project_dir(PROJECT);
    let out = taskshim(dir.path(), &["--help"]);

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Execute feature tests"));
    assert!(stdout.contains("--build"));
}

#[test]
fn unknown_flag_exits_with_usage_error() {
    let dir = project_dir(PROJECT);
    let out = taskshim(dir.path(), &["--deploy"]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--deploy"));
}

#[test]
fn dry_run_prints_instead_of_running() {
    let dir = project_dir(PROJECT);
    let out = taskshim(dir.path(), &["--fail", "--dry-run"]);

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("command: exit 7"));
    assert!(stdout.contains("fail = true"));
}

#[test]
fn schema_error_in_project_file_exits_one() {
    let dir = project_dir(
        r#"
[[flag]]
short = "-b"
long = "--build"
command = "echo a"

[[flag]]
short = "-c"
long = "--build"
command = "echo b"
"#,
    );
    let out = taskshim(dir.path(), &["--build"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("duplicate long flag"));
}

#[test]
fn config_path_can_come_from_environment() {
    let dir = project_dir(PROJECT);
    let elsewhere = tempfile::tempdir().unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_taskshim"))
        .arg("-b")
        .current_dir(elsewhere.path())
        .env("TASKSHIM_CONFIG", dir.path().join("Taskshim.toml"))
        .env("TASKSHIM_LOG", "error")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "built");
}

#[test]
fn missing_project_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = taskshim(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read project file"));
}

#[test]
fn help_works_without_project_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = taskshim(dir.path(), &["--help"]);

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn help_works_with_broken_project_file() {
    let dir = project_dir("[[flag]]\nshort = \"-b\"\n");
    let out = taskshim(dir.path(), &["-h"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[test]
fn project_flag_without_project_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = taskshim(dir.path(), &["--build"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read project file"));
}

#[cfg(target_os = "linux")]
#[test]
fn help_falls_back_to_stderr_when_stdout_write_fails() {
    if !Path::new("/dev/full").exists() {
        return;
    }
    let dir = project_dir(PROJECT);
    let out = Command::new(env!("CARGO_BIN_EXE_taskshim"))
        .arg("--help")
        .current_dir(dir.path())
        .env_remove("TASKSHIM_CONFIG")
        .env("TASKSHIM_LOG", "error")
        .stdout(std::fs::File::create("/dev/full").unwrap())
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("--build"));
}
