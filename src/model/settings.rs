use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User settings from settings.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory that default project locations hang off (default: the user's home)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
    /// Directory under `home` holding new projects
    #[serde(default = "default_projects_dir")]
    pub projects_dir: String,
    /// Extension of project files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_projects_dir() -> String {
    "projects".to_string()
}

fn default_extension() -> String {
    "geany".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            home: None,
            projects_dir: default_projects_dir(),
            extension: default_extension(),
        }
    }
}

impl Settings {
    /// Resolve the inputs of default path derivation.
    pub fn layout(&self) -> PathLayout {
        let home = self.home.clone().unwrap_or_else(user_home);
        PathLayout {
            home,
            projects_dir: self.projects_dir.clone(),
            extension: self.extension.clone(),
        }
    }
}

/// Where new projects go by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLayout {
    pub home: PathBuf,
    pub projects_dir: String,
    pub extension: String,
}

impl PathLayout {
    /// Layout rooted at `home` with the default directory and extension.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        PathLayout {
            home: home.into(),
            projects_dir: default_projects_dir(),
            extension: default_extension(),
        }
    }
}

/// Get the user's home directory
pub(crate) fn user_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}
