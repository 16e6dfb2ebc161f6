//! output formatting utilities for scriptable CLI output
//!
//! uses JSON-RPC 2.0 format for machine-readable output:
//! - success: {"jsonrpc": "2.0", "result": {...}, "id": null}
//! - error: {"jsonrpc": "2.0", "error": {"code": N, "message": "...", "data": {...}}, "id": null}
//!
//! also provides format string templating for `xit list --format`

use serde::Serialize;
use std::io::IsTerminal;

use crate::actions::ActionError;

/// JSON-RPC version constant
const JSONRPC_VERSION: &str = "2.0";

/// output mode determines how results are formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// human-readable text output
    Text,
    /// machine-readable JSON-RPC 2.0 output
    Json,
    /// no output on success (errors still go to stderr)
    Quiet,
    /// one output name per line, ideal for piping to fzf/xargs
    Names,
    /// custom format string with {field} placeholders
    Format,
}

impl OutputMode {
    /// determine output mode from CLI flags and environment
    ///
    /// priority: quiet > names > format > json > no_json > auto-detect
    pub fn from_flags(json: bool, no_json: bool, quiet: bool, names: bool, format: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        if names {
            return Self::Names;
        }
        if format {
            return Self::Format;
        }
        if json {
            return Self::Json;
        }
        if no_json {
            return Self::Text;
        }
        // auto-detect: JSON when stdout is not a TTY (piped)
        if !std::io::stdout().is_terminal() {
            Self::Json
        } else {
            Self::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// JSON-RPC 2.0 success response
#[derive(Serialize)]
pub struct JsonRpcResponse<T: Serialize> {
    pub jsonrpc: &'static str,
    pub result: T,
    /// null for CLI responses (no request id)
    pub id: Option<String>,
}

impl<T: Serialize> JsonRpcResponse<T> {
    pub fn new(result: T) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result,
            id: None,
        }
    }
}

/// JSON-RPC 2.0 error response
#[derive(Serialize)]
pub struct JsonRpcError {
    pub jsonrpc: &'static str,
    pub error: RpcError,
    pub id: Option<String>,
}

/// JSON-RPC 2.0 error object
#[derive(Serialize)]
pub struct RpcError {
    /// xit exit code offset by -32000 (application error range)
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ErrorData>,
}

/// additional error data
#[derive(Serialize)]
pub struct ErrorData {
    /// machine-readable error kind, e.g. "display_not_found"
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl JsonRpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            error: RpcError {
                code: to_jsonrpc_code(code),
                message: message.into(),
                data: None,
            },
            id: None,
        }
    }

    /// error carrying the action error kind and any suggestions
    pub fn from_action_error(err: &ActionError) -> Self {
        let mut response = Self::new(err.code, err.message.clone());
        response.error.data = Some(ErrorData {
            kind: err.kind.to_string(),
            suggestions: if err.has_suggestions() {
                Some(err.suggestions.clone())
            } else {
                None
            },
        });
        response
    }
}

/// convert xit exit code to JSON-RPC error code
/// JSON-RPC reserves -32000 to -32099 for server/application errors
fn to_jsonrpc_code(code: i32) -> i32 {
    -32000 - code
}

/// format a string template with {field} placeholders
///
/// # example
/// ```ignore
/// let display = Display::new("HDMI-1", 1);
/// assert_eq!(format_template("{index}: {id}", &display), "1: HDMI-1");
/// ```
pub fn format_template<T: Serialize>(template: &str, data: &T) -> String {
    let value = match serde_json::to_value(data) {
        Ok(v) => v,
        Err(_) => return template.to_string(),
    };

    let mut result = template.to_string();

    if let serde_json::Value::Object(map) = value {
        for (key, val) in map {
            let placeholder = format!("{{{}}}", key);
            let replacement = match val {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Array(arr) => {
                    // join array elements with comma, mode objects print by name
                    arr.iter()
                        .map(|v| match v {
                            serde_json::Value::String(s) => s.clone(),
                            serde_json::Value::Object(obj) => mode_name(obj)
                                .unwrap_or_else(|| v.to_string()),
                            _ => v.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(", ")
                }
                serde_json::Value::Object(_) => val.to_string(),
            };
            result = result.replace(&placeholder, &replacement);
        }
    }

    result
}

/// "WxH" for a serialized mode object
fn mode_name(obj: &serde_json::Map<String, serde_json::Value>) -> Option<String> {
    let width = obj.get("width")?.as_u64()?;
    let height = obj.get("height")?.as_u64()?;
    let interlaced = obj
        .get("interlaced")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let suffix = obj.get("suffix").and_then(|v| v.as_str()).unwrap_or("");
    Some(format!(
        "{}x{}{}{}",
        width,
        height,
        if interlaced { "i" } else { "" },
        suffix
    ))
}

/// print JSON-RPC success response to stdout
pub fn print_json<T: Serialize>(data: &T) {
    let response = JsonRpcResponse::new(data);
    if let Ok(json) = serde_json::to_string(&response) {
        println!("{}", json);
    }
}

/// report an action error
///
/// the one-line message always goes to stderr, JSON mode additionally
/// prints the JSON-RPC error object on stdout
pub fn print_error(err: &ActionError, mode: OutputMode) {
    if mode.is_json() {
        if let Ok(json) = serde_json::to_string(&JsonRpcError::from_action_error(err)) {
            println!("{}", json);
        }
    }
    eprintln!("xit: {}", err.describe());
}
