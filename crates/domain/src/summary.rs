//! Read models returned to API callers.

use serde::{Deserialize, Serialize};

use crate::id::{LightId, SceneId};
use crate::light::{Light, Spectrum};
use crate::scene::Scene;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightSummary {
    pub name: String,
    pub id: LightId,
    pub spectrum: Spectrum,
    /// `#`-prefixed hex color, when the light reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fraction in `[0, 1]`, 0 when the light is off.
    pub brightness: f64,
}

impl From<&Light> for LightSummary {
    fn from(light: &Light) -> Self {
        Self {
            name: light.name.clone(),
            id: light.id,
            spectrum: light.spectrum,
            color: light.color.as_ref().map(|c| format!("#{c}")),
            brightness: light.brightness(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub name: String,
    pub lights: Vec<LightSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSummary {
    pub name: String,
    pub id: SceneId,
}

impl From<Scene> for SceneSummary {
    fn from(scene: Scene) -> Self {
        Self {
            name: scene.name,
            id: scene.id,
        }
    }
}
