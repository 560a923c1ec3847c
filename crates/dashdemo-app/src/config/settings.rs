//! Settings file loading

use std::path::{Path, PathBuf};

use dashdemo_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# dashdemo configuration

[provider]
# Simulated dashboard fetch latency in milliseconds
latency_ms = 1000
# Probability (0.0 - 1.0) that a fetch fails, to exercise the retry screen
failure_rate = 0.0
failure_message = "Service temporarily unavailable"

[ui]
# Event poll interval in milliseconds
tick_rate_ms = 50
# Show the demo credentials under the login form
show_demo_hint = true
mask_password = true

[behavior]
# Ask before logging out
confirm_logout = false
"#;

/// `<config_dir>/dashdemo/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dashdemo").join(CONFIG_FILENAME))
}

/// Load settings from `config_path`. Missing or invalid files yield defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `config_path` unless one exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(())
}
