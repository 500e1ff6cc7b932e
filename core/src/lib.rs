//! Shared types for the app launcher control surface.
//!
//! - [`AppName`]: validated application name used as the menu key
//! - [`CompanionAdapter`]: where the companion process can be reached
//! - [`LauncherConfig`]: TOML configuration for menu timing, companion and logging

pub mod companion;
pub mod error;
pub mod logging;
pub mod types;

pub use companion::{CompanionAdapter, CompanionAddress};
pub use error::{Error, LoggingError, Result};
pub use types::{AppName, AppNameError, LauncherConfig};
