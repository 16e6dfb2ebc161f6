// integration tests for the version command

use crate::common::*;

#[test]
fn test_version_command_shows_version() {
    let output = run_xit(&["--no-json", "version"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with(&format!("xit {}", env!("CARGO_PKG_VERSION"))));
    assert!(text.contains("Built:"));
}

#[test]
fn test_version_json() {
    let output = run_xit(&["--json", "version"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["result"]["action"], "version");
    // system commands carry their payload under a nested "result"
    let info = &json["result"]["result"];
    assert_eq!(info["semver"], env!("CARGO_PKG_VERSION"));
    assert!(info["commit"].is_string());
}

#[test]
fn test_version_flag() {
    let output = run_xit(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
