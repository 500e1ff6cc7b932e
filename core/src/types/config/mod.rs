mod launcher;
mod menu;

pub use launcher::{
    CompanionConfig, ConfigError, LauncherConfig, LoggingConfig, MAX_HIDE_DELAY_MS, MenuConfig,
};
pub use menu::MenuSettings;
