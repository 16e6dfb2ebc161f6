// integration tests for layout commands against a fake display tool

use crate::common::*;

#[test]
fn test_mirror_runs_tool_with_scaled_mode() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["--no-json", "mirror"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        fixture.calls(),
        vec!["--output eDP-1 --mode 1920x1080 --output HDMI-1 --mode 1280x720 --scale 1x1"]
    );
    // silent on success
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_toggle_switches_to_dark_output() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["--no-json", "toggle"]);
    assert!(output.status.success());
    assert_eq!(
        fixture.calls(),
        vec!["--output HDMI-1 --auto --output eDP-1 --off"]
    );
}

#[test]
fn test_placement_commands() {
    let cases = [
        ("left", "--output HDMI-1 --auto --left-of eDP-1"),
        ("right", "--output HDMI-1 --auto --right-of eDP-1"),
        ("top", "--output HDMI-1 --auto --above eDP-1"),
        ("above", "--output HDMI-1 --auto --above eDP-1"),
        ("bottom", "--output HDMI-1 --auto --below eDP-1"),
        ("below", "--output HDMI-1 --auto --below eDP-1"),
    ];

    for (command, expected) in cases {
        let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);
        let output = fixture.run(&["--no-json", command]);
        assert!(output.status.success(), "{} failed", command);
        assert_eq!(fixture.calls(), vec![expected], "{}", command);
    }
}

#[test]
fn test_off_and_reset() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    assert!(fixture.run(&["--no-json", "off"]).status.success());
    assert!(fixture.run(&["--no-json", "reset"]).status.success());
    assert_eq!(
        fixture.calls(),
        vec![
            "--output HDMI-1 --off --output eDP-1 --auto",
            "--auto --output HDMI-1 --off",
        ]
    );
}

#[test]
fn test_reset_with_single_display() {
    let fixture = Fixture::new(LAPTOP_ONLY);

    let output = fixture.run(&["--no-json", "reset"]);
    assert!(output.status.success());
    assert_eq!(fixture.calls(), vec!["--auto"]);
}

#[test]
fn test_no_target_fails_without_running_tool() {
    let fixture = Fixture::new(LAPTOP_ONLY);

    let output = fixture.run(&["--no-json", "mirror"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no target display detected"));
    assert!(fixture.calls().is_empty());
}

#[test]
fn test_unknown_target_suggests_names() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["--no-json", "--target", "HDMI-2", "left"]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("requested target display not found: HDMI-2"));
    assert!(err.contains("did you mean: HDMI-1"));
    assert_eq!(err.lines().count(), 1);
    assert!(fixture.calls().is_empty());
}

#[test]
fn test_alias_resolves_target() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["--no-json", "-t", "projector", "right"]);
    assert!(output.status.success());
    assert_eq!(
        fixture.calls(),
        vec!["--output HDMI-1 --auto --right-of eDP-1"]
    );
}

#[test]
fn test_ambiguous_toggle_fails() {
    let both_dark = "\
eDP-1 connected (normal left inverted right x axis y axis)
   1920x1080     60.02 +
HDMI-1 connected (normal left inverted right x axis y axis)
   1280x720      60.00 +
";
    let fixture = Fixture::new(both_dark);

    let output = fixture.run(&["--no-json", "toggle"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("xit reset"));
    assert!(fixture.calls().is_empty());
}

#[test]
fn test_tool_exit_code_is_propagated() {
    let fixture = Fixture::with_status(LAPTOP_AND_PROJECTOR, 3);

    let output = fixture.run(&["--no-json", "off"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(fixture.calls().len(), 1);
}

#[test]
fn test_dry_run_prints_command() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["--no-json", "--dry-run", "left"]);
    assert!(output.status.success());
    assert!(stdout(&output).trim_end().ends_with("--output HDMI-1 --auto --left-of eDP-1"));
    assert!(fixture.calls().is_empty());
}

#[test]
fn test_json_layout_result() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["--json", "off"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["result"]["action"], "off");
    assert_eq!(json["result"]["primary"], "eDP-1");
    assert_eq!(json["result"]["target"], "HDMI-1");
    assert_eq!(json["result"]["exit_code"], 0);
}

#[test]
fn test_json_error_also_reports_on_stderr() {
    let fixture = Fixture::new(LAPTOP_ONLY);

    let output = fixture.run(&["--json", "toggle"]);
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["error"]["code"], -32001);
    assert_eq!(json["error"]["data"]["kind"], "no_target");
    assert!(stderr(&output).contains("no target display detected"));
}

#[test]
fn test_malformed_report_fails() {
    let fixture = Fixture::new("this is not a display report\n");

    let output = fixture.run(&["--no-json", "off"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to parse display report"));
    assert!(fixture.calls().is_empty());
}

#[test]
fn test_missing_tool_fails() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);
    let config_path = fixture.dir.path().join("missing-tool.json");
    std::fs::write(
        &config_path,
        r#"{ "tool": "/nonexistent/xrandr-for-xit-tests" }"#,
    )
    .unwrap();

    let output = run_xit(&["--config", config_path.to_str().unwrap(), "--no-json", "mirror"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("/nonexistent/xrandr-for-xit-tests"));
}
