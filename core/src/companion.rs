//! Addressing for the companion process.
//!
//! The launcher only records where the companion lives. Connection handling,
//! framing and delivery belong to the transport that consumes the address.

use crate::types::CompanionConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Host/port/path triple of a companion process. No syntax checks are applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanionAddress {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl CompanionAddress {
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    /// Renders the address as an HTTP URL for the transport.
    ///
    /// IPv6 literals are bracketed and a missing leading `/` is added to the path.
    pub fn url(&self) -> String {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let slash = if self.path.starts_with('/') { "" } else { "/" };
        format!("http://{host}:{}{slash}{}", self.port, self.path)
    }
}

/// Holds the companion address. Either fully configured or empty.
#[derive(Debug, Clone, Default)]
pub struct CompanionAdapter {
    address: Option<CompanionAddress>,
}

impl CompanionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the adapter from config. Incomplete companion sections leave it empty.
    pub fn from_config(config: &CompanionConfig) -> Self {
        Self {
            address: config.address(),
        }
    }

    /// Replaces the address with all three values at once. Always succeeds.
    pub fn set_address(
        &mut self,
        host: impl Into<String>,
        port: u16,
        path: impl Into<String>,
    ) -> bool {
        let address = CompanionAddress::new(host, port, path);
        debug!(
            host = %address.host,
            port = address.port,
            path = %address.path,
            "companion address set"
        );
        self.address = Some(address);
        true
    }

    pub fn address(&self) -> Option<&CompanionAddress> {
        self.address.as_ref()
    }

    pub fn host(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.host.as_str())
    }

    pub fn port(&self) -> Option<u16> {
        self.address.as_ref().map(|a| a.port)
    }

    pub fn path(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.path.as_str())
    }

    pub fn is_configured(&self) -> bool {
        self.address.is_some()
    }
}
