//! Live connection to the simulated gateway.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lumohub_app::ports::{EventSender, Gateway};
use lumohub_domain::error::LumoError;
use lumohub_domain::event::{Accessory, GatewayEvent};
use lumohub_domain::group::Group;
use lumohub_domain::id::LightId;
use lumohub_domain::light::Light;
use lumohub_domain::operation::{GroupOperation, LightOperation};

use crate::error::VirtualError;
use crate::seed::GatewayState;

/// Connection returned by [`VirtualConnector`](crate::VirtualConnector).
///
/// Every accepted operation changes the simulated state and is reported back
/// through the event feed, the same way a real gateway's observation works.
#[derive(Clone)]
pub struct VirtualGateway {
    state: Arc<Mutex<GatewayState>>,
    events: EventSender,
}

impl VirtualGateway {
    pub(crate) fn new(state: Arc<Mutex<GatewayState>>, events: EventSender) -> Self {
        Self { state, events }
    }

    /// Publish the full current state on the event feed.
    pub(crate) async fn publish_snapshot(&self) {
        let events = self.lock().snapshot_events();
        for event in events {
            self.emit(event).await;
        }
    }

    /// Simulate a device being unpaired from the gateway.
    pub async fn unpair(&self, id: LightId) {
        let removed = {
            let mut state = self.lock();
            let light = state.lights.remove(&id).is_some();
            let before = state.others.len();
            state.others.retain(|a| a.id() != id);
            light || state.others.len() != before
        };
        if removed {
            self.emit(GatewayEvent::DeviceRemoved { id }).await;
        }
    }

    /// Current simulated state of a light.
    #[must_use]
    pub fn light(&self, id: LightId) -> Option<Light> {
        self.lock().lights.get(&id).cloned()
    }

    fn apply_light_operation(
        &self,
        id: LightId,
        operation: LightOperation,
    ) -> Result<Light, VirtualError> {
        if let Some(color) = &operation.color {
            if !is_hex_color(color) {
                return Err(VirtualError::InvalidColor);
            }
        }

        let mut state = self.lock();
        let light = state
            .lights
            .get_mut(&id)
            .ok_or(VirtualError::UnknownDevice(id))?;

        if let Some(dimmer) = operation.dimmer {
            light.dimmer = dimmer.min(100);
        }
        if let Some(on) = operation.on_off {
            light.on = on;
        }
        if let Some(temperature) = operation.color_temperature {
            light.color_temperature = Some(temperature);
        }
        if let Some(color) = operation.color {
            light.color = Some(color);
        }
        Ok(light.clone())
    }

    fn apply_scene(&self, group: &Group, operation: GroupOperation) -> Result<Vec<Light>, VirtualError> {
        let mut state = self.lock();
        let dimmer = state
            .scenes
            .get(&operation.scene_id)
            .map(|preset| preset.dimmer)
            .ok_or(VirtualError::UnknownScene(operation.scene_id))?;
        let members = state
            .group(&group.name)
            .map_or_else(|| group.light_ids.clone(), |g| g.light_ids.clone());

        let mut changed = Vec::new();
        for id in members {
            if let Some(light) = state.lights.get_mut(&id) {
                light.dimmer = dimmer;
                light.on = dimmer > 0;
                changed.push(light.clone());
            }
        }
        Ok(changed)
    }

    async fn emit(&self, event: GatewayEvent) {
        if self.events.send(event).await.is_err() {
            tracing::debug!("event feed closed, dropping virtual gateway event");
        }
    }

    fn lock(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Gateway for VirtualGateway {
    async fn operate_light(&self, light: &Light, operation: LightOperation) -> Result<(), LumoError> {
        let updated = self.apply_light_operation(light.id, operation)?;
        tracing::debug!(light_id = %updated.id, dimmer = updated.dimmer, on = updated.on, "virtual light changed");
        self.emit(GatewayEvent::DeviceUpdated(Accessory::Light(updated)))
            .await;
        Ok(())
    }

    async fn operate_group(
        &self,
        group: &Group,
        operation: GroupOperation,
        recursive: bool,
    ) -> Result<(), LumoError> {
        let changed = self.apply_scene(group, operation)?;
        tracing::debug!(group = %group.name, scene_id = %operation.scene_id, recursive, "virtual scene applied");
        if recursive {
            for light in changed {
                self.emit(GatewayEvent::DeviceUpdated(Accessory::Light(light)))
                    .await;
            }
        }
        Ok(())
    }

    async fn reboot(&self) -> Result<(), LumoError> {
        tracing::info!("virtual gateway rebooting");
        self.publish_snapshot().await;
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit())
}
