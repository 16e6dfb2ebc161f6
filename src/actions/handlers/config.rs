//! config action handlers

use std::path::Path;

use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::result::ActionResult;
use crate::config::{self, Config};

/// execute config show action
pub fn execute_show(ctx: &ExecutionContext) -> Result<ActionResult, ActionError> {
    // serialize the current config to JSON
    let config_json = serde_json::to_value(ctx.config)
        .map_err(|e| ActionError::general(format!("failed to serialize config: {}", e)))?;

    Ok(ActionResult::simple("config_show", config_json))
}

/// execute config path action
pub fn execute_path(config_override: Option<&Path>) -> Result<ActionResult, ActionError> {
    let path = config::get_config_path_with_override(config_override)
        .map_err(|e| ActionError::general(format!("failed to get config path: {}", e)))?;

    Ok(ActionResult::simple(
        "config_path",
        serde_json::json!({
            "path": path.to_string_lossy(),
            "exists": path.exists(),
        }),
    ))
}

/// execute config verify action
pub fn execute_verify(config_override: Option<&Path>) -> Result<ActionResult, ActionError> {
    let path = config::get_config_path_with_override(config_override)
        .map_err(|e| ActionError::general(format!("failed to get config path: {}", e)))?;

    let errors = config::verify(&path)
        .map_err(|e| ActionError::general(format!("failed to verify config: {}", e)))?;

    Ok(ActionResult::config_check(
        errors,
        path.to_string_lossy().into_owned(),
    ))
}

/// execute config default action
pub fn execute_default(_ctx: &ExecutionContext) -> Result<ActionResult, ActionError> {
    let config_json = serde_json::to_value(Config::default()).map_err(|e| {
        ActionError::general(format!("failed to serialize default config: {}", e))
    })?;

    Ok(ActionResult::simple("config_default", config_json))
}

/// execute config set action (writes the config file)
pub fn execute_set(
    key: &str,
    value: &str,
    config_override: Option<&Path>,
) -> Result<ActionResult, ActionError> {
    let mut cfg = config::load_with_override(config_override).or_else(|e| match config_override {
        // set may create the file named by --config
        Some(path) if !path.exists() => Ok(Config::default()),
        _ => Err(e),
    })?;
    config::set_value(&mut cfg, key, value)?;
    let path = config::save_with_override(&cfg, config_override)?;

    Ok(ActionResult::simple(
        "config_set",
        serde_json::json!({
            "key": key,
            "value": value,
            "path": path.to_string_lossy(),
        }),
    ))
}

/// execute config reset action (writes the default config)
pub fn execute_reset(config_override: Option<&Path>) -> Result<ActionResult, ActionError> {
    let path = config::save_with_override(&Config::default(), config_override)?;

    Ok(ActionResult::simple(
        "config_reset",
        serde_json::json!({
            "status": "reset",
            "path": path.to_string_lossy(),
        }),
    ))
}
