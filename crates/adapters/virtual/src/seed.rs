//! Devices, groups and scenes the virtual gateway starts with.

use std::collections::BTreeMap;

use lumohub_domain::event::{Accessory, GatewayEvent};
use lumohub_domain::group::{Group, SUPER_GROUP_NAME};
use lumohub_domain::id::{LightId, SceneId};
use lumohub_domain::light::{Light, Spectrum};
use lumohub_domain::scene::Scene;

pub const CEILING: LightId = LightId::new(65_537);
pub const READING_LAMP: LightId = LightId::new(65_538);
pub const HALLWAY: LightId = LightId::new(65_539);
pub const BEDSIDE: LightId = LightId::new(65_540);
pub const REMOTE: LightId = LightId::new(65_541);

pub const EVERYDAY: SceneId = SceneId::new(196_608);
pub const RELAX: SceneId = SceneId::new(196_609);
pub const FOCUS: SceneId = SceneId::new(196_610);

/// A scene plus the dimmer level it applies to every member light.
#[derive(Debug, Clone)]
pub struct ScenePreset {
    pub scene: Scene,
    pub dimmer: u8,
}

/// Full simulated gateway state.
#[derive(Debug, Clone)]
pub struct GatewayState {
    pub lights: BTreeMap<LightId, Light>,
    pub others: Vec<Accessory>,
    pub groups: Vec<Group>,
    pub scenes: BTreeMap<SceneId, ScenePreset>,
}

impl GatewayState {
    /// Every event needed to describe the current state from scratch.
    pub fn snapshot_events(&self) -> Vec<GatewayEvent> {
        let lights = self
            .lights
            .values()
            .cloned()
            .map(|light| GatewayEvent::DeviceUpdated(Accessory::Light(light)));
        let others = self.others.iter().cloned().map(GatewayEvent::DeviceUpdated);
        let groups = self.groups.iter().cloned().map(GatewayEvent::GroupUpdated);
        let scenes = self
            .scenes
            .values()
            .map(|preset| GatewayEvent::SceneUpdated(preset.scene.clone()));

        lights.chain(others).chain(groups).chain(scenes).collect()
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }
}

impl Default for GatewayState {
    fn default() -> Self {
        let lights = [
            Light::builder(CEILING)
                .name("Ceiling")
                .spectrum(Spectrum::White)
                .on(true)
                .dimmer(80)
                .color_temperature(50)
                .build(),
            Light::builder(READING_LAMP)
                .name("Reading Lamp")
                .spectrum(Spectrum::Rgb)
                .on(true)
                .dimmer(60)
                .color("f1e0b5")
                .build(),
            Light::builder(HALLWAY).name("Hallway").build(),
            Light::builder(BEDSIDE)
                .name("Bedside")
                .spectrum(Spectrum::White)
                .color_temperature(90)
                .build(),
        ];

        let others = vec![Accessory::Other {
            id: REMOTE,
            name: "Living Room Remote".to_string(),
            kind: "remote".to_string(),
        }];

        let groups = vec![
            // the remote is a group member on a real gateway too
            Group::new("Living Room", [CEILING, READING_LAMP, REMOTE]),
            Group::new("Bedroom", [BEDSIDE]),
            Group::new("Hallway", [HALLWAY]),
            Group::new(SUPER_GROUP_NAME, [CEILING, READING_LAMP, HALLWAY, BEDSIDE]),
        ];

        let scenes = [(EVERYDAY, "Everyday", 70), (RELAX, "Relax", 30), (FOCUS, "Focus", 100)]
            .into_iter()
            .map(|(id, name, dimmer)| {
                (
                    id,
                    ScenePreset {
                        scene: Scene::new(id, name),
                        dimmer,
                    },
                )
            })
            .collect();

        Self {
            lights: lights.into_iter().map(|l| (l.id, l)).collect(),
            others,
            groups,
            scenes,
        }
    }
}
