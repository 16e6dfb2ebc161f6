// integration tests for argument handling and exit codes

use crate::common::*;

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let output = run_xit(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_unknown_subcommand_fails_with_usage() {
    let output = run_xit(&["sideways"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("sideways"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_help_succeeds() {
    let output = run_xit(&["--help"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for command in ["mirror", "toggle", "left", "right", "top", "bottom", "reset", "off"] {
        assert!(text.contains(command), "help should mention {}", command);
    }
}

#[test]
fn test_completions_bash() {
    let output = run_xit(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("xit"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let output = run_xit(&["completions", "tcsh"]);
    assert_eq!(output.status.code(), Some(1));
}
