// shared utilities for integration tests
//
// layout commands run against a fake display tool: a shell script that
// prints a canned report when called without arguments and records every
// other invocation in calls.log

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// laptop panel driving the picture, projector connected but off
pub const LAPTOP_AND_PROJECTOR: &str = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm
   1920x1080     60.02*+  59.93
   1280x720      60.00
HDMI-1 connected (normal left inverted right x axis y axis)
   1280x720      60.00 +
   1024x768      60.00
DP-1 disconnected (normal left inverted right x axis y axis)
";

/// only the laptop panel
pub const LAPTOP_ONLY: &str = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm
   1920x1080     60.02*+
HDMI-1 disconnected (normal left inverted right x axis y axis)
";

/// path to the built xit binary
pub fn xit_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_xit"))
}

/// temp directory holding a config file and a fake display tool
pub struct Fixture {
    pub dir: TempDir,
    pub config_path: PathBuf,
}

impl Fixture {
    /// fixture whose tool prints `report` and exits 0 on every command
    pub fn new(report: &str) -> Self {
        Self::with_status(report, 0)
    }

    /// fixture whose tool exits with `status` when running a layout command
    pub fn with_status(report: &str, status: i32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create test directory");
        let report_path = dir.path().join("report.txt");
        fs::write(&report_path, report).expect("Failed to write report");

        let tool_path = dir.path().join("fake-xrandr");
        let log_path = dir.path().join("calls.log");
        write_fake_tool(&tool_path, &report_path, &log_path, status);

        let config_path = dir.path().join("config.json");
        let config = serde_json::json!({
            "tool": tool_path.to_string_lossy(),
            "display_aliases": { "projector": "HDMI-1" }
        });
        fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap())
            .expect("Failed to write test config");

        Self { dir, config_path }
    }

    /// run xit with --config pointing at this fixture
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd_args = vec!["--config", self.config_path.to_str().unwrap()];
        cmd_args.extend(args);
        run_xit(&cmd_args)
    }

    /// arguments of every layout command the fake tool received, one line each
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// run xit with the given arguments and capture output
pub fn run_xit(args: &[&str]) -> Output {
    Command::new(xit_binary_path())
        .args(args)
        .env_remove("XIT_CONFIG")
        .output()
        .expect("Failed to run xit")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_fake_tool(path: &Path, report: &Path, log: &Path, status: i32) {
    let script = format!(
        r#"#!/bin/sh
if [ "$#" -eq 0 ]; then
    cat '{}'
    exit 0
fi
printf '%s\n' "$*" >> '{}'
exit {}
"#,
        report.display(),
        log.display(),
        status
    );
    fs::write(path, script).expect("Failed to write fake tool");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }
}
