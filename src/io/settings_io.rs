use std::fs;
use std::path::{Path, PathBuf};

use crate::model::settings::{Settings, user_home};

/// Get the settings file path, respecting XDG_CONFIG_HOME
pub fn settings_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| user_home().join(".config"));
    config_dir.join("projprops").join("settings.toml")
}

/// Read settings from a specific path.
/// A missing file gives the defaults; so does a corrupted one, with a warning.
pub fn read_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    event = "core.settings.parse_failed",
                    path = %path.display(),
                    error = %e,
                    "Settings file is not valid TOML, using defaults"
                );
                Settings::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                event = "core.settings.read_failed",
                path = %path.display(),
                error = %e
            );
            Settings::default()
        }
    }
}

/// Read settings from the default location.
pub fn read_settings() -> Settings {
    read_settings_from(&settings_path())
}
