mod types;

pub use types::{parse_hex_color, Config, ConfigIssue, ModalTimingConfig, PaintConfig};

use std::path::{Path, PathBuf};

/// Loads and validates the config at `path`.
///
/// Never fails: a missing, unreadable, unparsable or invalid file yields
/// `Config::default()` and the reason is logged.
pub fn load_config(path: &Path) -> Config {
    let config = if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Config::from_toml_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::error!("Failed to parse config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                log::error!("Failed to read config file: {}", e);
                Config::default()
            }
        }
    } else {
        log::info!("No config file found at {:?}, using defaults", path);
        Config::default()
    };

    let issues = config.validate();
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error).collect();
    let warnings: Vec<_> = issues.iter().filter(|i| !i.is_error).collect();

    for warning in &warnings {
        log::warn!("Config: {}", warning);
    }
    for error in &errors {
        log::error!("Config: {}", error);
    }

    if !errors.is_empty() {
        log::error!(
            "Config has {} error(s); falling back to defaults.",
            errors.len()
        );
        return Config::default();
    }

    config
}

/// `~/.config/cosmic-ui/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("cosmic-ui")
        .join("config.toml")
}
