mod schema;

pub use schema::Config;

use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_ENV_VAR: &str = "XIT_CONFIG";

/// default config location: $XIT_CONFIG, else ~/.xit/config.json
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    Ok(dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not find home directory"))?
        .join(".xit")
        .join("config.json"))
}

/// config location honoring the --config flag
pub fn get_config_path_with_override(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_path(),
    }
}

/// load config, an explicit --config path must exist, the default one may not
pub fn load_with_override(override_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = override_path {
        if !path.exists() {
            return Err(anyhow!("config file not found: {}", path.display()));
        }
        return load_from(path);
    }

    let path = get_config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

pub fn save_with_override(config: &Config, override_path: Option<&Path>) -> Result<PathBuf> {
    let path = get_config_path_with_override(override_path)?;

    // ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(path)
}

/// set a config value by dotted key; an empty value clears optional fields
pub fn set_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let optional = || {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    match parts.as_slice() {
        ["tool"] => {
            if value.trim().is_empty() {
                return Err(anyhow!("tool must not be empty"));
            }
            config.tool = value.trim().to_string();
        }
        ["primary"] => config.primary = optional(),
        ["target"] => config.target = optional(),
        ["display_aliases", alias] if !alias.is_empty() => match optional() {
            Some(output) => {
                config.display_aliases.insert(alias.to_string(), output);
            }
            None => {
                config.display_aliases.remove(*alias);
            }
        },
        _ => {
            return Err(anyhow!(
                "Unknown config key: {}. Use tool, primary, target or display_aliases.<name>",
                key
            ));
        }
    }

    Ok(())
}

/// Verify configuration file and return a list of errors
pub fn verify(path: &Path) -> Result<Vec<String>> {
    let mut errors = Vec::new();

    if !path.exists() {
        return Err(anyhow!("config file not found: {}", path.display()));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            return Err(anyhow!("invalid JSON: {}", e));
        }
    };

    if config.tool.trim().is_empty() {
        errors.push("tool: must not be empty".to_string());
    }

    for (field, value) in [("primary", &config.primary), ("target", &config.target)] {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            errors.push(format!("{}: must not be empty", field));
        }
    }

    if let (Some(primary), Some(target)) = (&config.primary, &config.target) {
        if primary == target {
            errors.push(format!(
                "primary and target are both '{}'",
                primary
            ));
        }
    }

    for (alias, output) in &config.display_aliases {
        let prefix = format!("display_aliases.{}", alias);
        if alias.trim().is_empty() {
            errors.push("display_aliases: alias name must not be empty".to_string());
        }
        if output.trim().is_empty() {
            errors.push(format!("{}: output name must not be empty", prefix));
        }
        if config.display_aliases.contains_key(output) {
            errors.push(format!(
                "{}: points at another alias '{}', aliases are not chained",
                prefix, output
            ));
        }
    }

    Ok(errors)
}
