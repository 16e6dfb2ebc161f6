use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::display::Overrides;
use crate::tool::DEFAULT_TOOL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// display tool to query and command, `~` is expanded
    #[serde(default = "default_tool")]
    pub tool: String,
    /// default primary output when --primary is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// default target output when --target is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// friendly names for outputs, e.g. "tv" -> "HDMI-1"
    #[serde(default)]
    pub display_aliases: BTreeMap<String, String>,
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            primary: None,
            target: None,
            display_aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn tool_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.tool).to_string())
    }

    /// CLI flags win over config defaults; aliases apply to both
    pub fn overrides(&self, primary: Option<String>, target: Option<String>) -> Overrides {
        Overrides::new(
            primary.or_else(|| self.primary.clone()),
            target.or_else(|| self.target.clone()),
        )
        .resolve_aliases(&self.display_aliases)
    }
}
