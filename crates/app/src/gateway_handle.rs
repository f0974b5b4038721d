//! Swappable slot holding the current gateway connection.

use std::sync::{Arc, PoisonError, RwLock};

use lumohub_domain::error::{LumoError, TransportError};
use lumohub_domain::group::Group;
use lumohub_domain::light::Light;
use lumohub_domain::operation::{GroupOperation, LightOperation};

use crate::ports::Gateway;

/// [`Gateway`] implementation that forwards to whichever connection is
/// currently installed.
///
/// The slot starts empty and stays empty when no gateway is discovered or the
/// session fails; every call then fails with [`TransportError::NotConnected`].
pub struct GatewayHandle<G> {
    connection: RwLock<Option<Arc<G>>>,
}

impl<G> Default for GatewayHandle<G> {
    fn default() -> Self {
        Self {
            connection: RwLock::new(None),
        }
    }
}

impl<G> GatewayHandle<G> {
    /// Create an empty (disconnected) handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly connected gateway, replacing any previous one.
    pub fn install(&self, connection: G) {
        *self
            .connection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(connection));
    }

    /// Drop the current connection, if any.
    pub fn clear(&self) {
        self.connection
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn current(&self) -> Result<Arc<G>, TransportError> {
        self.connection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(TransportError::NotConnected)
    }
}

impl<G: Gateway + Send + Sync> Gateway for GatewayHandle<G> {
    async fn operate_light(&self, light: &Light, operation: LightOperation) -> Result<(), LumoError> {
        let connection = self.current()?;
        connection.operate_light(light, operation).await
    }

    async fn operate_group(
        &self,
        group: &Group,
        operation: GroupOperation,
        recursive: bool,
    ) -> Result<(), LumoError> {
        let connection = self.current()?;
        connection.operate_group(group, operation, recursive).await
    }

    async fn reboot(&self) -> Result<(), LumoError> {
        let connection = self.current()?;
        connection.reboot().await
    }
}
