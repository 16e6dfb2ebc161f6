// integration tests for the list command

use crate::common::*;

#[test]
fn test_list_names_connected_only() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["list", "--names"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "eDP-1\nHDMI-1\n");
}

#[test]
fn test_list_all_includes_disconnected() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["list", "--all", "--names"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "eDP-1\nHDMI-1\nDP-1\n");
}

#[test]
fn test_query_alias_with_format() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["query", "--format", "{index}:{id}:{primary}"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0:eDP-1:true\n1:HDMI-1:false\n");
}

#[test]
fn test_list_text_output() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["--no-json", "list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("eDP-1 [0]: connected 1920x1080+0+0 (primary), 2 modes"));
    assert!(text.contains("    1920x1080*+"));
    assert!(text.contains("HDMI-1 [1]: connected, 2 modes"));
    assert!(!text.contains("DP-1 [2]"));
}

#[test]
fn test_list_json_output() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);

    let output = fixture.run(&["list", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let displays = json["result"]["displays"].as_array().unwrap();
    assert_eq!(displays.len(), 2);
    assert_eq!(displays[0]["id"], "eDP-1");
    assert_eq!(displays[0]["native"], true);
    assert_eq!(displays[1]["native"], false);
    assert_eq!(displays[1]["modes"][0]["width"], 1280);
}

#[test]
fn test_list_does_not_run_layout_commands() {
    let fixture = Fixture::new(LAPTOP_AND_PROJECTOR);
    fixture.run(&["list"]);
    assert!(fixture.calls().is_empty());
}
