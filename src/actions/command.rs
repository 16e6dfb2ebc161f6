//! command definitions - what the CLI asks the action layer to do

use crate::layout::Layout;

/// all commands supported by xit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ==================== Layout Commands ====================
    /// query, select a display pair and apply a layout
    Layout(Layout),

    // ==================== Query Commands ====================
    /// list displays from the current report
    List {
        /// include disconnected outputs
        all: bool,
    },

    // ==================== System Commands ====================
    /// show version information
    Version,

    // ==================== Config Commands ====================
    /// configuration management
    Config(ConfigCommand),
}

/// config subcommands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
    Show,
    Path,
    Verify,
    Default,
    Set { key: String, value: String },
    Reset,
}

impl Command {
    /// whether the command talks to the display tool
    pub fn queries_displays(&self) -> bool {
        matches!(self, Command::Layout(_) | Command::List { .. })
    }
}
