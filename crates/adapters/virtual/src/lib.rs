//! # lumohub-adapter-virtual
//!
//! Virtual gateway that simulates a lighting hub for testing and
//! demonstration purposes.
//!
//! ## Seeded state
//!
//! | Kind | Name | Notes |
//! |------|------|-------|
//! | Light | Ceiling | white spectrum, on |
//! | Light | Reading Lamp | rgb spectrum, on |
//! | Light | Hallway | no spectrum, off |
//! | Light | Bedside | white spectrum, off |
//! | Remote | Living Room Remote | never cached, listed in "Living Room" |
//! | Group | Living Room, Bedroom, Hallway, `SuperGroup` | |
//! | Scene | Everyday, Relax, Focus | each applies a fixed dimmer level |
//!
//! ## Dependency rule
//!
//! Depends on `lumohub-app` (port traits) and `lumohub-domain` only.

mod config;
mod connection;
mod error;
pub mod seed;

use std::sync::{Arc, Mutex};

use lumohub_app::ports::{EventSender, GatewayConnector, GatewayInfo};
use lumohub_domain::credentials::Credentials;
use lumohub_domain::error::LumoError;

pub use config::VirtualConfig;
pub use connection::VirtualGateway;
pub use error::VirtualError;
use seed::GatewayState;

/// Connector for the simulated gateway.
pub struct VirtualConnector {
    config: VirtualConfig,
    state: Arc<Mutex<GatewayState>>,
}

impl VirtualConnector {
    #[must_use]
    pub fn new(config: VirtualConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(GatewayState::default())),
        }
    }

    fn psk_for(&self, identity: &str) -> String {
        format!("{}:{identity}", self.config.gateway_name)
    }
}

impl Default for VirtualConnector {
    fn default() -> Self {
        Self::new(VirtualConfig::default())
    }
}

impl GatewayConnector for VirtualConnector {
    type Connection = VirtualGateway;

    fn name(&self) -> &'static str {
        "virtual"
    }

    async fn discover(&mut self) -> Result<Option<GatewayInfo>, LumoError> {
        if !self.config.discoverable {
            return Ok(None);
        }
        Ok(Some(GatewayInfo {
            name: self.config.gateway_name.clone(),
            host: self.config.host.clone(),
        }))
    }

    async fn authenticate(
        &mut self,
        _gateway: &GatewayInfo,
        security_code: &str,
    ) -> Result<Credentials, LumoError> {
        let accepted = match &self.config.security_code {
            Some(expected) => expected == security_code,
            None => !security_code.is_empty(),
        };
        if !accepted {
            return Err(VirtualError::SecurityCodeRejected.into());
        }

        let identity = format!("lumohub-{}", std::process::id());
        Ok(Credentials {
            psk: self.psk_for(&identity),
            identity,
        })
    }

    async fn connect(
        &mut self,
        _gateway: &GatewayInfo,
        credentials: &Credentials,
        events: EventSender,
    ) -> Result<VirtualGateway, LumoError> {
        if credentials.psk != self.psk_for(&credentials.identity) {
            return Err(VirtualError::CredentialsRejected.into());
        }

        let gateway = VirtualGateway::new(Arc::clone(&self.state), events);
        gateway.publish_snapshot().await;
        Ok(gateway)
    }
}
