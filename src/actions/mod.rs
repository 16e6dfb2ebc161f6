//! action layer - the single execution path behind the CLI
//!
//! every subcommand is turned into a `Command` and run through `execute`,
//! so selection, argument building and error mapping behave the same no
//! matter how the command was requested

mod command;
mod context;
mod error;
mod handlers;
mod result;

pub use command::{Command, ConfigCommand};
pub use context::ExecutionContext;
pub use error::ActionError;
pub use result::{ActionData, ActionResult};

/// execute a command with the given context
pub fn execute(cmd: Command, ctx: &ExecutionContext) -> Result<ActionResult, ActionError> {
    match cmd {
        // layout commands
        Command::Layout(layout) => handlers::layout::execute(layout, ctx),

        // query commands
        Command::List { all } => handlers::list::execute(all, ctx),

        // system commands
        Command::Version => handlers::system::execute_version(ctx),

        // config commands
        Command::Config(config_cmd) => {
            let config_override = ctx.config_path_override();
            match config_cmd {
                ConfigCommand::Show => handlers::config::execute_show(ctx),
                ConfigCommand::Path => handlers::config::execute_path(config_override),
                ConfigCommand::Verify => handlers::config::execute_verify(config_override),
                ConfigCommand::Default => handlers::config::execute_default(ctx),
                ConfigCommand::Set { ref key, ref value } => {
                    handlers::config::execute_set(key, value, config_override)
                }
                ConfigCommand::Reset => handlers::config::execute_reset(config_override),
            }
        }
    }
}
