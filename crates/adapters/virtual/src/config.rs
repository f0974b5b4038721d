//! Virtual gateway configuration.

use serde::Deserialize;

/// Configuration for the simulated gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    /// Name the gateway announces during discovery.
    pub gateway_name: String,
    /// Host reported during discovery.
    pub host: String,
    /// When `false`, discovery finds nothing (simulates a missing gateway).
    pub discoverable: bool,
    /// Security code the gateway expects. `None` accepts any non-empty code.
    pub security_code: Option<String>,
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            gateway_name: "gw-virtual".to_string(),
            host: "127.0.0.1".to_string(),
            discoverable: true,
            security_code: None,
        }
    }
}
