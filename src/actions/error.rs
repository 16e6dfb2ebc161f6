//! action error types

use crate::cli::exit_codes;
use crate::display::{ParseError, SelectError};
use crate::layout::LayoutError;
use crate::tool::ToolError;

/// error returned by action execution
#[derive(Debug, Clone)]
pub struct ActionError {
    /// process exit code
    pub code: i32,
    /// machine-readable error kind, e.g. "no_target"
    pub kind: &'static str,
    /// error message
    pub message: String,
    /// suggested alternatives (e.g., similar output names)
    pub suggestions: Vec<String>,
}

impl ActionError {
    pub fn new(code: i32, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind,
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// the display tool could not be queried
    pub fn query(e: ToolError) -> Self {
        Self::new(exit_codes::ERROR, "query_error", e.to_string())
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(exit_codes::ERROR, "error", message)
    }

    /// check if this error has suggestions
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// single-line message including suggestions
    pub fn describe(&self) -> String {
        if self.has_suggestions() {
            format!(
                "{} (did you mean: {}?)",
                self.message,
                self.suggestions.join(", ")
            )
        } else {
            self.message.clone()
        }
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ActionError {}

impl From<anyhow::Error> for ActionError {
    fn from(e: anyhow::Error) -> Self {
        ActionError::general(format!("{:#}", e))
    }
}

impl From<ToolError> for ActionError {
    fn from(e: ToolError) -> Self {
        ActionError::new(exit_codes::ERROR, "tool_error", e.to_string())
    }
}

impl From<ParseError> for ActionError {
    fn from(e: ParseError) -> Self {
        ActionError::new(
            exit_codes::ERROR,
            "parse_error",
            format!("failed to parse display report: {}", e),
        )
    }
}

impl From<SelectError> for ActionError {
    fn from(e: SelectError) -> Self {
        let kind = match &e {
            SelectError::NoDisplays => "no_displays",
            SelectError::NoPrimary => "no_primary",
            SelectError::NoTarget => "no_target",
            SelectError::DisplayNotFound { .. } => "display_not_found",
        };
        let suggestions = match &e {
            SelectError::DisplayNotFound { suggestions, .. } => suggestions.clone(),
            _ => Vec::new(),
        };
        ActionError::new(exit_codes::ERROR, kind, e.to_string()).with_suggestions(suggestions)
    }
}

impl From<LayoutError> for ActionError {
    fn from(e: LayoutError) -> Self {
        let kind = match &e {
            LayoutError::AmbiguousState { .. } => "ambiguous_state",
            LayoutError::InvalidModeData { .. } => "invalid_mode_data",
            LayoutError::MissingTarget { .. } => "no_target",
        };
        ActionError::new(exit_codes::ERROR, kind, e.to_string())
    }
}
