//! execution context for actions

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::display::Overrides;
use crate::tool::DisplayTool;

/// context passed to action handlers
pub struct ExecutionContext<'a> {
    /// configuration
    pub config: &'a Config,
    /// display tool used for queries and layout commands
    pub tool: &'a dyn DisplayTool,
    /// primary/target overrides, aliases already resolved
    pub overrides: Overrides,
    /// whether to print verbose debug output
    pub verbose: bool,
    /// print the layout command instead of running it
    pub dry_run: bool,
    /// config file path override (for --config flag)
    pub config_path: Option<PathBuf>,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(config: &'a Config, tool: &'a dyn DisplayTool) -> Self {
        Self {
            config,
            tool,
            overrides: Overrides::default(),
            verbose: false,
            dry_run: false,
            config_path: None,
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_config_path(mut self, config_path: Option<&Path>) -> Self {
        self.config_path = config_path.map(|p| p.to_path_buf());
        self
    }

    /// get config path override as Option<&Path>
    pub fn config_path_override(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
