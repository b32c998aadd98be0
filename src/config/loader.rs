use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::Config;

/// Directory name used for both global and local config
const CONFIG_DIR_NAME: &str = "swatch";

impl Config {
    /// Load and merge configs (global + local)
    pub fn load() -> Result<Config> {
        let current_dir = std::env::current_dir()?;

        let global = load_global_config()?.unwrap_or_default();
        let local = load_local_config(&current_dir)?.unwrap_or_default();

        Ok(global.merge(local))
    }
}

/// Read a single config file
pub fn load_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load global config from ~/.config/swatch/config.toml
fn load_global_config() -> Result<Option<Config>> {
    let config_path = dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join("config.toml"));

    if let Some(path) = config_path {
        if path.exists() {
            return load_file(&path).map(Some);
        }
    }

    Ok(None)
}

/// Load local config from .swatch/config.toml in the start directory or its parents
pub fn load_local_config(start_path: &Path) -> Result<Option<Config>> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current
            .join(format!(".{}", CONFIG_DIR_NAME))
            .join("config.toml");
        if config_path.exists() {
            return load_file(&config_path).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}
