use crate::companion::CompanionAddress;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound for the deferred menu hide, in milliseconds.
pub const MAX_HIDE_DELAY_MS: u64 = 10_000;

/// Launcher configuration, persisted as launcher.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub companion: CompanionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LauncherConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("launcher.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.menu.hide_delay_ms > MAX_HIDE_DELAY_MS {
            errors.push(format!(
                "hide_delay_ms must be at most {MAX_HIDE_DELAY_MS}"
            ));
        }

        if self.menu.create_entry_title.trim().is_empty() {
            errors.push("create_entry_title must not be blank".to_string());
        }

        if self.companion.is_partial() {
            errors.push("companion host, port and path must be set together".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            menu: MenuConfig {
                hide_delay_ms: if self.menu.hide_delay_ms > MAX_HIDE_DELAY_MS {
                    defaults.menu.hide_delay_ms
                } else {
                    self.menu.hide_delay_ms
                },
                create_entry_title: if self.menu.create_entry_title.trim().is_empty() {
                    defaults.menu.create_entry_title
                } else {
                    self.menu.create_entry_title.clone()
                },
                create_entry_icon: self.menu.create_entry_icon.clone(),
            },
            companion: if self.companion.is_partial() {
                defaults.companion
            } else {
                self.companion.clone()
            },
            logging: self.logging.clone(),
        }
    }
}

/// App selector menu settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Delay between a hide request and the menu actually disappearing.
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
    #[serde(default = "default_create_entry_title")]
    pub create_entry_title: String,
    /// Icon shown before the create entry title. Empty means no icon.
    #[serde(default = "default_create_entry_icon")]
    pub create_entry_icon: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
            create_entry_title: default_create_entry_title(),
            create_entry_icon: default_create_entry_icon(),
        }
    }
}

fn default_hide_delay_ms() -> u64 {
    500
}

fn default_create_entry_title() -> String {
    "Create new app".to_string()
}

fn default_create_entry_icon() -> String {
    "add".to_string()
}

/// Where the companion process listens. All three fields or none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CompanionConfig {
    /// Returns the configured address when host, port and path are all present.
    pub fn address(&self) -> Option<CompanionAddress> {
        match (&self.host, self.port, &self.path) {
            (Some(host), Some(port), Some(path)) => {
                Some(CompanionAddress::new(host.clone(), port, path.clone()))
            }
            _ => None,
        }
    }

    fn is_partial(&self) -> bool {
        let set = [self.host.is_some(), self.port.is_some(), self.path.is_some()];
        set.iter().any(|s| *s) && !set.iter().all(|s| *s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
