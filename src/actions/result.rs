//! action result types - response format shared by text and JSON output

use serde::Serialize;

use crate::cli::exit_codes;
use crate::display::Display;

/// result of an action execution
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    /// action that was performed
    pub action: &'static str,
    /// result data (varies by action type)
    #[serde(flatten)]
    pub data: ActionData,
}

/// action-specific result data
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ActionData {
    /// layout command that was built (and run unless dry_run)
    Layout {
        primary: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        program: String,
        args: Vec<String>,
        dry_run: bool,
        /// exit code of the display tool, None for dry runs
        #[serde(skip_serializing_if = "Option::is_none")]
        exit_code: Option<i32>,
    },

    /// list action result
    List { displays: Vec<Display> },

    /// config verify result, fails the process when invalid
    ConfigCheck {
        valid: bool,
        errors: Vec<String>,
        path: String,
    },

    /// simple result with arbitrary JSON data (for system commands, etc.)
    Simple { result: serde_json::Value },
}

impl ActionResult {
    pub fn layout(
        action: &'static str,
        primary: &str,
        target: Option<&str>,
        program: &str,
        args: Vec<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self {
            action,
            data: ActionData::Layout {
                primary: primary.to_string(),
                target: target.map(str::to_string),
                program: program.to_string(),
                args,
                dry_run: exit_code.is_none(),
                exit_code,
            },
        }
    }

    pub fn list(displays: Vec<Display>) -> Self {
        Self {
            action: "list",
            data: ActionData::List { displays },
        }
    }

    pub fn simple(action: &'static str, result: serde_json::Value) -> Self {
        Self {
            action,
            data: ActionData::Simple { result },
        }
    }

    pub fn config_check(errors: Vec<String>, path: String) -> Self {
        Self {
            action: "config_verify",
            data: ActionData::ConfigCheck {
                valid: errors.is_empty(),
                errors,
                path,
            },
        }
    }

    /// exit code the process should finish with after this action
    pub fn exit_code(&self) -> i32 {
        match &self.data {
            ActionData::Layout {
                exit_code: Some(code),
                ..
            } => *code,
            ActionData::ConfigCheck { valid: false, .. } => exit_codes::ERROR,
            _ => exit_codes::SUCCESS,
        }
    }
}
