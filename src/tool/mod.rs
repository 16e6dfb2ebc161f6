//! display tool seam - querying and commanding xrandr (or a compatible tool)

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

pub const DEFAULT_TOOL: &str = "xrandr";

/// exit code reported when the tool dies without one (killed by a signal)
const SIGNAL_EXIT_BASE: i32 = 128;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with status {code}{}", stderr_suffix(.stderr))]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },
    #[error("{program} produced output that is not valid UTF-8")]
    Encoding { program: String },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// something that reports display topology and applies layout arguments
pub trait DisplayTool {
    /// program name for messages and dry runs
    fn program(&self) -> &str;

    /// run without arguments and return the report text
    fn query(&self) -> Result<String, ToolError>;

    /// run with `args`, standard streams inherited, and return the exit code
    fn apply(&self, args: &[String]) -> Result<i32, ToolError>;
}

/// the real tool, spawned as a subprocess
#[derive(Debug, Clone)]
pub struct Xrandr {
    program: PathBuf,
    display_name: String,
}

impl Xrandr {
    pub fn new(program: impl AsRef<Path>) -> Self {
        let program = program.as_ref().to_path_buf();
        let display_name = program.display().to_string();
        Self {
            program,
            display_name,
        }
    }
}

impl DisplayTool for Xrandr {
    fn program(&self) -> &str {
        &self.display_name
    }

    fn query(&self) -> Result<String, ToolError> {
        let output = Command::new(&self.program)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: self.display_name.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                program: self.display_name.clone(),
                code: exit_code(output.status),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ToolError::Encoding {
            program: self.display_name.clone(),
        })
    }

    fn apply(&self, args: &[String]) -> Result<i32, ToolError> {
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| ToolError::Spawn {
                program: self.display_name.clone(),
                source,
            })?;

        Ok(exit_code(status))
    }
}

/// exit code of a finished child, shell-style 128+N for signals
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    SIGNAL_EXIT_BASE
}

/// render a command line for dry runs and verbose output
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
