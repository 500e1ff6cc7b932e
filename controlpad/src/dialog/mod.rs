//! Modal dialog prompting for a new app name.

use launcher_core::{AppName, AppNameError};
use thiserror::Error;
use tracing::{debug, warn};

pub type ConfirmCallback = Box<dyn FnOnce(&AppName)>;
pub type AlertSink = Box<dyn FnMut(&str)>;

#[derive(Debug, Error)]
pub enum CreateAppError {
    #[error("invalid app name {value:?}: {source}")]
    InvalidName {
        value: String,
        #[source]
        source: AppNameError,
    },
}

/// Holds at most one pending confirm callback, captured by `show`.
///
/// A rejected confirmation leaves the dialog open so the user can retry;
/// a successful confirmation or a dismissal closes it.
pub struct CreateAppDialog {
    open: bool,
    field_value: String,
    on_confirm: Option<ConfirmCallback>,
    alert: AlertSink,
}

impl CreateAppDialog {
    /// `alert` receives blocking validation messages for the user.
    pub fn new(alert: impl FnMut(&str) + 'static) -> Self {
        Self {
            open: false,
            field_value: String::new(),
            on_confirm: None,
            alert: Box::new(alert),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn field_value(&self) -> &str {
        &self.field_value
    }

    pub fn set_field_value(&mut self, value: impl Into<String>) {
        self.field_value = value.into();
    }

    /// Opens the dialog with an empty field. Replaces any pending callback.
    pub fn show(&mut self, on_confirm: impl FnOnce(&AppName) + 'static) {
        if self.on_confirm.is_some() {
            debug!("superseding pending create-app confirmation");
        }
        self.on_confirm = Some(Box::new(on_confirm));
        self.field_value.clear();
        self.open = true;
        debug!("create-app dialog opened");
    }

    /// Validates the field and hands the name to the pending callback.
    ///
    /// Returns `Ok(None)` when the dialog is not open.
    pub fn confirm(&mut self) -> Result<Option<AppName>, CreateAppError> {
        if !self.open {
            return Ok(None);
        }

        let name = match AppName::try_new(self.field_value.clone()) {
            Ok(name) => name,
            Err(source) => {
                warn!(value = %self.field_value, %source, "rejected app name");
                (self.alert)(&format!("Invalid app name: {}", self.field_value));
                return Err(CreateAppError::InvalidName {
                    value: self.field_value.clone(),
                    source,
                });
            }
        };

        if let Some(on_confirm) = self.on_confirm.take() {
            on_confirm(&name);
        }
        self.close();
        debug!(app = %name, "create-app dialog confirmed");
        Ok(Some(name))
    }

    /// Closes without invoking the pending callback.
    pub fn dismiss(&mut self) {
        self.on_confirm = None;
        self.close();
        debug!("create-app dialog dismissed");
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests;
