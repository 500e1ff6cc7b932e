use super::MenuConfig;
use std::time::Duration;

/// Runtime menu settings derived from [`MenuConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSettings {
    pub hide_delay: Duration,
    pub create_entry_title: String,
    pub create_entry_icon: Option<String>,
}

impl From<&MenuConfig> for MenuSettings {
    fn from(config: &MenuConfig) -> Self {
        let icon = config.create_entry_icon.trim();
        Self {
            hide_delay: Duration::from_millis(config.hide_delay_ms),
            create_entry_title: config.create_entry_title.clone(),
            create_entry_icon: (!icon.is_empty()).then(|| icon.to_string()),
        }
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self::from(&MenuConfig::default())
    }
}
