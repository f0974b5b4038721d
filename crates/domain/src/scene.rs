//! Scene — a preset stored on the gateway.

use serde::{Deserialize, Serialize};

use crate::id::SceneId;
use crate::usage::Ranked;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
}

impl Scene {
    #[must_use]
    pub fn new(id: SceneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Ranked for Scene {
    type Key = SceneId;

    fn rank_key(&self) -> SceneId {
        self.id
    }

    fn rank_name(&self) -> &str {
        &self.name
    }
}
