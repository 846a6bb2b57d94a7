//! Application configuration
//!
//! Sources, later ones overriding earlier ones:
//! - Built-in defaults
//! - `config.toml` in the user's config directory:
//!   - Linux: ~/.config/library-admin/config.toml
//!   - macOS: ~/Library/Application Support/library-admin/config.toml
//!   - Windows: %APPDATA%\library-admin\config.toml
//! - `LIBRARY_ADMIN_*` environment variables (e.g. `LIBRARY_ADMIN_THEME=light`)

use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use iced::Theme;
use serde::{Deserialize, Serialize};

use crate::error::AdminError;

const ENV_PREFIX: &str = "LIBRARY_ADMIN_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// Fallback log filter when `RUST_LOG` is not set
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            log_level: "info".to_string(),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment
    pub fn load() -> Result<Self, AdminError> {
        Self::load_from(Self::config_path())
    }

    /// Load with an explicit config file; a missing file is skipped
    pub fn load_from(path: Option<PathBuf>) -> Result<Self, AdminError> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Get the path where the config file is looked up
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("library-admin");
        path.push("config.toml");
        Some(path)
    }

    fn extract(figment: Figment) -> Result<Self, AdminError> {
        Ok(figment.extract()?)
    }
}
