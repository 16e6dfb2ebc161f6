use clap::{Parser, Subcommand};
use clap_complete::Shell;

use std::io::Write;
use std::path::PathBuf;

use crate::actions::{self, ActionData, ActionError, ActionResult, Command, ExecutionContext};
use crate::config::{self, Config};
use crate::display::Display;
use crate::tool::{self, Xrandr};

use super::completions;
use super::exit_codes;
use super::output::{self, OutputMode};

#[derive(Parser)]
#[command(name = "xit")]
#[command(about = "Mirror, arrange and toggle a second display through xrandr")]
#[command(version)]
pub struct Cli {
    /// Path to config file (overrides XIT_CONFIG env var and default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Primary display (output name or alias), defaults to the first output reported
    #[arg(short, long, global = true)]
    pub primary: Option<String>,

    /// Target display (output name or alias), defaults to the first other connected output
    #[arg(short, long, global = true)]
    pub target: Option<String>,

    /// Print the display tool command instead of running it
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Output in JSON format (auto-enabled when stdout is piped)
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Force text output even when stdout is piped
    #[arg(long, global = true, conflicts_with = "json")]
    pub no_json: bool,

    /// Suppress all output on success (errors still go to stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show what xit detected and the command it runs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mirror the primary display onto the target, scaled to keep the aspect ratio
    Mirror,

    /// Switch output between the primary and the target display
    Toggle,

    /// Place the target left of the primary
    Left,

    /// Place the target right of the primary
    Right,

    /// Place the target above the primary
    Top,

    /// Place the target below the primary
    Bottom,

    /// Place the target above the primary (same as top)
    Above,

    /// Place the target below the primary (same as bottom)
    Below,

    /// Re-enable outputs at their preferred modes and turn the target off
    Reset,

    /// Turn the target off and the primary on
    Off,

    /// List displays reported by the display tool
    #[command(alias = "query")]
    List {
        /// Include disconnected outputs
        #[arg(short, long)]
        all: bool,

        /// Output one output name per line (for piping to fzf/xargs)
        #[arg(long, conflicts_with = "format")]
        names: bool,

        /// Custom output format using {field} placeholders, e.g. '{index}: {id}'
        #[arg(long)]
        format: Option<String>,
    },

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Show config file path
    Path,
    /// Check the config file for errors
    Verify,
    /// Show the default configuration
    Default,
    /// Set a configuration value (tool, primary, target, display_aliases.<name>)
    Set {
        /// Key to set
        key: String,
        /// Value to set, empty to clear
        value: String,
    },
    /// Reset configuration to defaults
    Reset,
}

/// run the parsed command line and return the process exit code
pub fn execute(cli: Cli) -> i32 {
    let (names, format) = match &cli.command {
        Commands::List { names, format, .. } => (*names, format.clone()),
        _ => (false, None),
    };
    let output_mode =
        OutputMode::from_flags(cli.json, cli.no_json, cli.quiet, names, format.is_some());

    let Some(cmd) = cli.command.to_command() else {
        if let Commands::Completions { shell } = cli.command {
            return print_completions(shell);
        }
        return exit_codes::ERROR;
    };

    let config = if needs_config(&cmd) {
        match config::load_with_override(cli.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                output::print_error(&ActionError::from(e), output_mode);
                return exit_codes::ERROR;
            }
        }
    } else {
        Config::default()
    };

    if cli.verbose && needs_config(&cmd) {
        if let Ok(path) = config::get_config_path_with_override(cli.config.as_deref()) {
            eprintln!("Using config: {}", path.display());
        }
    }

    let tool = Xrandr::new(config.tool_path());
    let overrides = config.overrides(cli.primary, cli.target);
    let ctx = ExecutionContext::new(&config, &tool)
        .with_overrides(overrides)
        .with_verbose(cli.verbose)
        .with_dry_run(cli.dry_run)
        .with_config_path(cli.config.as_deref());

    match actions::execute(cmd, &ctx) {
        Ok(result) => {
            print_result(&result, output_mode, format.as_deref());
            result.exit_code()
        }
        Err(e) => {
            output::print_error(&e, output_mode);
            e.code
        }
    }
}

/// commands that read the config file; the rest run against defaults so a
/// broken file can still be inspected, verified or reset
fn needs_config(cmd: &Command) -> bool {
    cmd.queries_displays() || matches!(cmd, Command::Config(actions::ConfigCommand::Show))
}

fn print_completions(shell: Shell) -> i32 {
    let script = completions::generate_completion(shell);
    match std::io::stdout().write_all(&script) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("xit: failed to write completions: {}", e);
            exit_codes::ERROR
        }
    }
}

fn print_result(result: &ActionResult, mode: OutputMode, format: Option<&str>) {
    match mode {
        OutputMode::Quiet => {}
        OutputMode::Json => output::print_json(result),
        OutputMode::Names | OutputMode::Format => {
            if let ActionData::List { displays } = &result.data {
                for d in displays {
                    match format {
                        Some(template) => println!("{}", output::format_template(template, d)),
                        None => println!("{}", d.id),
                    }
                }
            } else {
                print_text(result);
            }
        }
        OutputMode::Text => print_text(result),
    }
}

fn print_text(result: &ActionResult) {
    match &result.data {
        ActionData::Layout {
            program,
            args,
            dry_run,
            ..
        } => {
            // silent on success unless nothing was run (Unix convention)
            if *dry_run {
                println!("{}", tool::command_line(program, args));
            }
        }
        ActionData::List { displays } => {
            for d in displays {
                print_display(d);
            }
        }
        ActionData::ConfigCheck { errors, path, .. } => {
            if errors.is_empty() {
                println!("Configuration is valid: {}", path);
            } else {
                println!("Configuration has {} error(s): {}", errors.len(), path);
                println!();
                for error in errors {
                    println!("  - {}", error);
                }
            }
        }
        ActionData::Simple { result: value } => print_simple(result.action, value),
    }
}

fn print_display(display: &Display) {
    println!("{}", display.describe());
    for mode in &display.modes {
        let current = if mode.current { "*" } else { "" };
        let preferred = if mode.preferred { "+" } else { "" };
        println!("    {}{}{}", mode.name(), current, preferred);
    }
}

fn print_simple(action: &str, value: &serde_json::Value) {
    let text = |key: &str| value[key].as_str().unwrap_or_default().to_string();

    match action {
        "config_path" => println!("{}", text("path")),
        "config_set" => println!("Set {} = {}", text("key"), text("value")),
        "config_reset" => println!("Configuration reset to defaults: {}", text("path")),
        "version" => {
            println!("xit {}", text("version_string"));
            println!("Built: {}", text("build_date"));
        }
        _ => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(_) => println!("{}", value),
        },
    }
}
