//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_taskdeck(args: &[&str], input: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_taskdeck");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run taskdeck binary");
    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write scripted input");
    child.wait_with_output().expect("failed to wait for taskdeck")
}

#[test]
fn exit_choice_ends_session_successfully() {
    let output = run_taskdeck(&[], "0\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Task Manager Menu:"));
    assert!(stdout.contains("Goodbye."));
}

#[test]
fn closed_stdin_ends_session_successfully() {
    let output = run_taskdeck(&[], "");
    assert!(output.status.success());
}

#[test]
fn unknown_flag_exits_with_error() {
    let output = run_taskdeck(&["--bogus"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unexpected argument"));
}

#[test]
fn help_shows_file_flag() {
    let output = run_taskdeck(&["--help"], "");
    // clap help goes through the error path of run(), so it lands on stderr.
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("--file"));
}

#[test]
fn add_save_then_load_in_a_new_session() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tasks.txt");
    let path_arg = path.to_str().expect("temp path is UTF-8");

    let script = "1\nBuy milk\n2% milk\n3\n2024-01-01\n8\n0\n";
    let output = run_taskdeck(&["--file", path_arg], script);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Task added successfully (ID 1)."));
    assert!(stdout.contains("Tasks saved to"));

    let saved = std::fs::read_to_string(&path).expect("tasks file was written");
    assert!(saved.contains("Task ID: 1"));
    assert!(saved.contains("Title: Buy milk"));
    assert!(saved.contains("Completed: No"));

    let output = run_taskdeck(&["--file", path_arg], "9\n3\n0\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Loaded 1 tasks from"));
    assert!(stdout.contains("Title: Buy milk"));
    assert!(stdout.contains("Status: Pending"));
}

#[test]
fn load_from_missing_file_reports_error_and_continues() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.txt");
    let path_arg = path.to_str().expect("temp path is UTF-8");

    let output = run_taskdeck(&["--file", path_arg], "9\n0\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Error:"));
    assert!(stdout.contains("Goodbye."));
}
