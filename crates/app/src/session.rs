//! Gateway session lifecycle and the event pump feeding the cache.
//!
//! The session walks discover → credentials → connect once at startup.
//! Failures are reported to the caller, which logs them and keeps running
//! with an empty cache; nothing here retries or reconnects.

use std::sync::Arc;

use lumohub_domain::credentials::Credentials;
use lumohub_domain::error::LumoError;
use lumohub_domain::event::GatewayEvent;
use tokio::sync::mpsc;

use crate::cache::LightCache;
use crate::ports::{CredentialStore, EventSender, GatewayConnector, GatewayInfo};

/// Errors raised while establishing a gateway session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("gateway discovery failed")]
    Discovery(#[source] LumoError),

    #[error("gateway authentication failed")]
    Authentication(#[source] LumoError),

    #[error("failed to connect to gateway")]
    Connect(#[source] LumoError),
}

/// Establishes a connection through a [`GatewayConnector`], reusing stored
/// credentials when available.
pub struct GatewaySession<C, S> {
    connector: C,
    store: S,
    security_code: String,
}

impl<C, S> GatewaySession<C, S>
where
    C: GatewayConnector,
    S: CredentialStore,
{
    pub fn new(connector: C, store: S, security_code: impl Into<String>) -> Self {
        Self {
            connector,
            store,
            security_code: security_code.into(),
        }
    }

    /// Run the session lifecycle and return the live connection.
    ///
    /// Returns `Ok(None)` when no gateway was discovered. Once connected,
    /// the connection publishes gateway events through `events`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when discovery, authentication or connecting
    /// fails. Credential store failures are logged and never fatal.
    pub async fn establish(
        mut self,
        events: EventSender,
    ) -> Result<Option<C::Connection>, SessionError> {
        tracing::info!(connector = self.connector.name(), "discovering gateway");
        let Some(gateway) = self
            .connector
            .discover()
            .await
            .map_err(SessionError::Discovery)?
        else {
            tracing::warn!(connector = self.connector.name(), "no gateway discovered");
            return Ok(None);
        };
        tracing::info!(gateway = %gateway.name, host = %gateway.host, "found gateway");

        let credentials = self.credentials(&gateway).await?;

        let connection = self
            .connector
            .connect(&gateway, &credentials, events)
            .await
            .map_err(SessionError::Connect)?;
        tracing::info!(gateway = %gateway.name, "connected to gateway");

        Ok(Some(connection))
    }

    async fn credentials(&mut self, gateway: &GatewayInfo) -> Result<Credentials, SessionError> {
        match self.store.load().await {
            Ok(Some(credentials)) => {
                tracing::info!(identity = %credentials.identity, "using stored credentials");
                return Ok(credentials);
            }
            Ok(None) => tracing::info!("no stored credentials, authenticating"),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored credentials, authenticating");
            }
        }

        let credentials = self
            .connector
            .authenticate(gateway, &self.security_code)
            .await
            .map_err(SessionError::Authentication)?;

        if let Err(err) = self.store.save(&credentials).await {
            tracing::warn!(error = %err, "failed to save credentials");
        } else {
            tracing::info!(identity = %credentials.identity, "saved new credentials");
        }

        Ok(credentials)
    }
}

/// Apply events to the cache, in arrival order, until every sender is gone.
pub async fn pump_events(mut events: mpsc::Receiver<GatewayEvent>, cache: Arc<LightCache>) {
    while let Some(event) = events.recv().await {
        cache.apply(event);
    }
    tracing::debug!("gateway event feed closed");
}
