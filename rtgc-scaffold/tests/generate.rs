//! Integration tests for the interactive generate command

use std::fs;

use rtgc_scaffold::{Answer, GenerateCommand, Manifest, RunOutcome, ScriptedPrompter, Wizard};
use tempfile::TempDir;

fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}

fn command_in(cwd: &TempDir) -> GenerateCommand {
    GenerateCommand::new(
        Wizard::new(cwd.path().to_path_buf(), None),
        Manifest::rtgc(),
    )
}

/// Test that confirming in an empty directory creates the whole tree
#[test]
fn test_confirmed_run_creates_project() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new([text(""), Answer::Confirm(true)]);

    let outcome = command_in(&temp_dir).execute(&mut prompter).unwrap();

    let RunOutcome::Completed(result) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(result.created, Manifest::rtgc().len());
    assert_eq!(result.skipped, 0);
    assert!(temp_dir.path().join("RTGC/src/main.cpp").is_file());
    assert_eq!(prompter.remaining(), 0);
}

/// Test that declining the final confirmation leaves the disk untouched
#[test]
fn test_declined_run_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new([text(""), Answer::Confirm(false)]);

    let outcome = command_in(&temp_dir).execute(&mut prompter).unwrap();

    assert_eq!(outcome, RunOutcome::Aborted);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

/// Test that declining to create a missing directory asks again
#[test]
fn test_declined_directory_creation_reprompts() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new([
        text("not-there"),
        Answer::Confirm(false),
        text("not-there"),
        Answer::Confirm(true),
        Answer::Confirm(true),
    ]);

    let outcome = command_in(&temp_dir).execute(&mut prompter).unwrap();

    let RunOutcome::Completed(result) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(result.project_root, temp_dir.path().join("not-there/RTGC"));
    assert_eq!(prompter.warnings().len(), 1);
    assert!(temp_dir.path().join("not-there/RTGC/CMakeLists.txt").is_file());
}

/// Test that cancelling after agreeing to create a directory does not create it
#[test]
fn test_cancel_after_creation_consent_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new([
        text("later"),
        Answer::Confirm(true),
        Answer::Confirm(false),
    ]);

    let outcome = command_in(&temp_dir).execute(&mut prompter).unwrap();

    assert_eq!(outcome, RunOutcome::Aborted);
    assert!(!temp_dir.path().join("later").exists());
}

/// Test that rerunning over an existing project only skips
#[test]
fn test_rerun_reports_skipped_files() {
    let temp_dir = TempDir::new().unwrap();
    let command = command_in(&temp_dir);

    command
        .execute(&mut ScriptedPrompter::new([text(""), Answer::Confirm(true)]))
        .unwrap();
    let outcome = command
        .execute(&mut ScriptedPrompter::new([text(""), Answer::Confirm(true)]))
        .unwrap();

    let RunOutcome::Completed(result) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(result.created, 0);
    assert_eq!(result.skipped, Manifest::rtgc().len());
}

/// Test that a filesystem failure surfaces as an error with context
#[test]
fn test_materialization_failure_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    // A file where the project root directory should go
    fs::write(temp_dir.path().join("RTGC"), "in the way").unwrap();
    let mut prompter = ScriptedPrompter::new([text(""), Answer::Confirm(true)]);

    let err = command_in(&temp_dir).execute(&mut prompter).unwrap_err();

    assert!(err.to_string().starts_with("Failed to create project structure in"));
    assert!(err
        .chain()
        .any(|cause| cause.to_string().starts_with("Failed to create directory")));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("RTGC")).unwrap(),
        "in the way"
    );
}

/// Test that running out of answers is an error, not a hang
#[test]
fn test_closed_input_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::default();

    assert!(command_in(&temp_dir).execute(&mut prompter).is_err());
}
