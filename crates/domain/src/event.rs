//! Events pushed by the gateway.
//!
//! The gateway does not distinguish "created" from "updated": every report
//! carries the full entity and replaces whatever was known under its id.

use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::id::{LightId, SceneId};
use crate::light::Light;
use crate::scene::Scene;

/// A device paired with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Light(Light),
    /// Remotes, motion sensors, plugs, blinds, … Never cached.
    Other {
        id: LightId,
        name: String,
        kind: String,
    },
}

impl Accessory {
    #[must_use]
    pub fn id(&self) -> LightId {
        match self {
            Self::Light(light) => light.id,
            Self::Other { id, .. } => *id,
        }
    }
}

impl From<Light> for Accessory {
    fn from(light: Light) -> Self {
        Self::Light(light)
    }
}

/// A single notification from the gateway's observation feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GatewayEvent {
    DeviceUpdated(Accessory),
    DeviceRemoved { id: LightId },
    GroupUpdated(Group),
    SceneUpdated(Scene),
    SceneRemoved { id: SceneId },
}
