pub(crate) mod app_name;
pub use app_name::{AppName, AppNameError};

pub(crate) mod config;
pub use config::{
    CompanionConfig, ConfigError, LauncherConfig, LoggingConfig, MAX_HIDE_DELAY_MS, MenuConfig,
    MenuSettings,
};
