//! In-memory model of the gateway's lights, groups and scenes.
//!
//! The cache is written only by gateway events (see [`LightCache::apply`])
//! and read by the command and query services. Each entity map sits behind
//! its own lock; no guard is ever held across an `.await`.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lumohub_domain::event::{Accessory, GatewayEvent};
use lumohub_domain::group::Group;
use lumohub_domain::id::{LightId, SceneId};
use lumohub_domain::light::Light;
use lumohub_domain::scene::Scene;

/// Shared cache of everything the gateway reported.
///
/// Accessors return owned snapshots so callers can never mutate cached state.
#[derive(Debug, Default)]
pub struct LightCache {
    lights: RwLock<BTreeMap<LightId, Light>>,
    groups: RwLock<BTreeMap<String, Group>>,
    super_group: RwLock<Option<Group>>,
    scenes: RwLock<BTreeMap<SceneId, Scene>>,
}

impl LightCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single gateway event.
    pub fn apply(&self, event: GatewayEvent) {
        match event {
            GatewayEvent::DeviceUpdated(accessory) => self.upsert_accessory(accessory),
            GatewayEvent::DeviceRemoved { id } => self.remove_light(id),
            GatewayEvent::GroupUpdated(group) => self.upsert_group(group),
            GatewayEvent::SceneUpdated(scene) => self.upsert_scene(scene),
            GatewayEvent::SceneRemoved { id } => self.remove_scene(id),
        }
    }

    // ── Lights ───────────────────────────────────────────────────────

    /// Replace whatever is cached under the accessory's id.
    ///
    /// Only lights are kept: an update for any other accessory kind evicts
    /// a light previously cached under the same id.
    pub fn upsert_accessory(&self, accessory: Accessory) {
        match accessory {
            Accessory::Light(light) => self.upsert_light(light),
            Accessory::Other { id, kind, .. } => {
                tracing::debug!(device_id = %id, %kind, "ignoring non-light accessory");
                self.remove_light(id);
            }
        }
    }

    pub fn upsert_light(&self, light: Light) {
        tracing::debug!(light_id = %light.id, name = %light.name, "light updated");
        write(&self.lights).insert(light.id, light);
    }

    /// Removing an unknown light is a no-op.
    pub fn remove_light(&self, id: LightId) {
        if write(&self.lights).remove(&id).is_some() {
            tracing::debug!(light_id = %id, "light removed");
        }
    }

    #[must_use]
    pub fn light(&self, id: LightId) -> Option<Light> {
        read(&self.lights).get(&id).cloned()
    }

    /// All cached lights, ordered by id.
    #[must_use]
    pub fn lights(&self) -> Vec<Light> {
        read(&self.lights).values().cloned().collect()
    }

    // ── Groups ───────────────────────────────────────────────────────

    /// Store a group, routing the reserved super-group to its own slot.
    pub fn upsert_group(&self, group: Group) {
        if group.is_super_group() {
            tracing::debug!(members = group.light_ids.len(), "super-group updated");
            *write(&self.super_group) = Some(group);
        } else {
            tracing::debug!(group = %group.name, members = group.light_ids.len(), "group updated");
            write(&self.groups).insert(group.name.clone(), group);
        }
    }

    /// Regular groups ordered by name. Never includes the super-group.
    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        read(&self.groups).values().cloned().collect()
    }

    #[must_use]
    pub fn super_group(&self) -> Option<Group> {
        read(&self.super_group).clone()
    }

    /// Resolve a group's members against the light cache.
    ///
    /// Member ids without a cached light are skipped; member order is kept.
    #[must_use]
    pub fn members_of(&self, group: &Group) -> Vec<Light> {
        let lights = read(&self.lights);
        group
            .light_ids
            .iter()
            .filter_map(|id| lights.get(id).cloned())
            .collect()
    }

    // ── Scenes ───────────────────────────────────────────────────────

    pub fn upsert_scene(&self, scene: Scene) {
        tracing::debug!(scene_id = %scene.id, name = %scene.name, "scene updated");
        write(&self.scenes).insert(scene.id, scene);
    }

    /// Removing an unknown scene is a no-op.
    pub fn remove_scene(&self, id: SceneId) {
        if write(&self.scenes).remove(&id).is_some() {
            tracing::debug!(scene_id = %id, "scene removed");
        }
    }

    #[must_use]
    pub fn scene(&self, id: SceneId) -> Option<Scene> {
        read(&self.scenes).get(&id).cloned()
    }

    /// All cached scenes, ordered by id.
    #[must_use]
    pub fn scenes(&self) -> Vec<Scene> {
        read(&self.scenes).values().cloned().collect()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
