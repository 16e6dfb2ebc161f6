//! conversion helpers for CLI commands

use crate::actions::{Command, ConfigCommand};
use crate::layout::{Direction, Layout};

use super::commands::{Commands, ConfigCommands};

impl Commands {
    /// convert a CLI subcommand to the unified Command enum
    ///
    /// returns None for commands handled entirely by the CLI (completions)
    pub fn to_command(&self) -> Option<Command> {
        let layout = |layout| Some(Command::Layout(layout));
        match self {
            Commands::Mirror => layout(Layout::Mirror),
            Commands::Toggle => layout(Layout::Toggle),
            Commands::Left => layout(Layout::Place(Direction::Left)),
            Commands::Right => layout(Layout::Place(Direction::Right)),
            Commands::Top => layout(Layout::Place(Direction::Top)),
            Commands::Bottom => layout(Layout::Place(Direction::Bottom)),
            Commands::Above => layout(Layout::Place(Direction::Above)),
            Commands::Below => layout(Layout::Place(Direction::Below)),
            Commands::Reset => layout(Layout::Reset),
            Commands::Off => layout(Layout::Off),
            Commands::List { all, .. } => Some(Command::List { all: *all }),
            Commands::Config { command } => Some(command.to_command()),
            Commands::Version => Some(Command::Version),
            Commands::Completions { .. } => None,
        }
    }
}

impl ConfigCommands {
    /// convert CLI config command to unified Command enum
    pub fn to_command(&self) -> Command {
        match self {
            ConfigCommands::Show => Command::Config(ConfigCommand::Show),
            ConfigCommands::Path => Command::Config(ConfigCommand::Path),
            ConfigCommands::Verify => Command::Config(ConfigCommand::Verify),
            ConfigCommands::Default => Command::Config(ConfigCommand::Default),
            ConfigCommands::Set { key, value } => Command::Config(ConfigCommand::Set {
                key: key.clone(),
                value: value.clone(),
            }),
            ConfigCommands::Reset => Command::Config(ConfigCommand::Reset),
        }
    }
}
