//! Command service — validated mutations forwarded to the gateway.

use std::sync::Arc;

use lumohub_domain::capability::Capability;
use lumohub_domain::error::{LumoError, UnknownDeviceError};
use lumohub_domain::id::{LightId, SceneId};
use lumohub_domain::light::Light;
use lumohub_domain::operation::{GroupOperation, LightOperation};

use crate::cache::LightCache;
use crate::ports::Gateway;
use crate::usage::SceneUsage;

/// Application service that checks requests against the cache and the
/// light's capabilities, then issues exactly one gateway call.
pub struct CommandService<G> {
    cache: Arc<LightCache>,
    usage: Arc<SceneUsage>,
    gateway: G,
}

impl<G: Gateway> CommandService<G> {
    /// Create a new service backed by the shared cache, the scene usage
    /// counters, and a gateway.
    pub fn new(cache: Arc<LightCache>, usage: Arc<SceneUsage>, gateway: G) -> Self {
        Self {
            cache,
            usage,
            gateway,
        }
    }

    /// Dim a light to `fraction` (clamped to `[0, 1]`), switching it off at 0%.
    ///
    /// # Errors
    ///
    /// Returns [`LumoError::UnknownDevice`] if the light is not cached, or
    /// [`LumoError::Transport`] if the gateway call fails.
    pub async fn set_brightness(&self, light_id: LightId, fraction: f64) -> Result<(), LumoError> {
        let light = self.find_light(light_id, Capability::Brightness)?;
        self.operate(&light, LightOperation::brightness(fraction))
            .await
    }

    /// Set a white-spectrum light's color temperature (clamped to `[0.01, 1]`).
    ///
    /// # Errors
    ///
    /// Returns [`LumoError::UnknownDevice`] if the light is not cached,
    /// [`LumoError::Unsupported`] unless the light has a white spectrum, or
    /// [`LumoError::Transport`] if the gateway call fails.
    pub async fn set_temperature(&self, light_id: LightId, fraction: f64) -> Result<(), LumoError> {
        let light = self.find_light(light_id, Capability::Temperature)?;
        self.operate(&light, LightOperation::temperature(fraction))
            .await
    }

    /// Set an rgb light's color. A leading `#` is stripped; the rest is sent
    /// as-is.
    ///
    /// # Errors
    ///
    /// Returns [`LumoError::UnknownDevice`] if the light is not cached,
    /// [`LumoError::Unsupported`] unless the light has an rgb spectrum, or
    /// [`LumoError::Transport`] if the gateway rejects the call.
    pub async fn set_color(&self, light_id: LightId, hex_color: &str) -> Result<(), LumoError> {
        let light = self.find_light(light_id, Capability::Color)?;
        self.operate(&light, LightOperation::color(hex_color)).await
    }

    /// Activate a scene on the super-group.
    ///
    /// Without a super-group this succeeds without doing anything. Usage is
    /// only counted once the gateway accepted the call.
    ///
    /// # Errors
    ///
    /// Returns [`LumoError::Transport`] if the gateway call fails.
    pub async fn activate_scene(&self, scene_id: SceneId) -> Result<(), LumoError> {
        let Some(super_group) = self.cache.super_group() else {
            tracing::debug!(scene_id = %scene_id, "no super-group known, skipping scene activation");
            return Ok(());
        };

        self.gateway
            .operate_group(&super_group, GroupOperation { scene_id }, true)
            .await
            .inspect_err(|err| {
                tracing::warn!(scene_id = %scene_id, error = %err, "scene activation failed");
            })?;

        self.usage.register_usage(scene_id);
        tracing::info!(scene_id = %scene_id, "scene activated");
        Ok(())
    }

    /// Ask the gateway to reboot.
    ///
    /// # Errors
    ///
    /// Returns [`LumoError::Transport`] if no gateway is connected or the
    /// call fails.
    pub async fn reboot_gateway(&self) -> Result<(), LumoError> {
        tracing::warn!("rebooting gateway");
        self.gateway.reboot().await
    }

    fn find_light(&self, light_id: LightId, capability: Capability) -> Result<Light, LumoError> {
        let light = self.cache.light(light_id).ok_or_else(|| {
            tracing::warn!(light_id = %light_id, %capability, "cannot operate unknown light");
            UnknownDeviceError { id: light_id }
        })?;
        capability.ensure(&light).inspect_err(|err| {
            tracing::warn!(light_id = %light_id, error = %err, "operation not supported");
        })?;
        Ok(light)
    }

    async fn operate(&self, light: &Light, operation: LightOperation) -> Result<(), LumoError> {
        tracing::debug!(light_id = %light.id, ?operation, "operating light");
        self.gateway.operate_light(light, operation).await
    }
}
