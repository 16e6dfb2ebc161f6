// integration tests for man page generation

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// run generate-man in a scratch directory and return the page
fn generate_man_page() -> String {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_generate-man")))
        .current_dir(dir.path())
        .output()
        .expect("Failed to run generate-man");
    assert!(output.status.success());

    fs::read_to_string(dir.path().join("man").join("xit.1")).unwrap()
}

#[test]
fn test_man_page_sections() {
    let content = generate_man_page();

    assert!(content.contains(".TH xit"));
    assert!(content.contains("NAME"));
    assert!(content.contains("SYNOPSIS"));
    assert!(content.contains("SUBCOMMANDS"));
}

#[test]
fn test_man_page_lists_layout_commands() {
    let content = generate_man_page();

    for command in ["mirror", "toggle", "reset", "off"] {
        assert!(
            content.contains(&format!("xit-{}", command))
                || content.contains(&format!("xit\\-{}", command)),
            "man page should document {}",
            command
        );
    }
}
