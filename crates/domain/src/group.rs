//! Group — a named set of lights.

use serde::{Deserialize, Serialize};

use crate::id::LightId;

/// Name the gateway gives to the group containing every light.
///
/// This group is the only valid target for scene activation and is never
/// listed alongside regular groups.
pub const SUPER_GROUP_NAME: &str = "SuperGroup";

/// A group of lights as last reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    /// Member light ids in gateway order. May reference lights that are no
    /// longer (or not yet) known.
    pub light_ids: Vec<LightId>,
}

impl Group {
    #[must_use]
    pub fn new(name: impl Into<String>, light_ids: impl IntoIterator<Item = LightId>) -> Self {
        Self {
            name: name.into(),
            light_ids: light_ids.into_iter().collect(),
        }
    }

    /// Whether this is the reserved all-lights group.
    #[must_use]
    pub fn is_super_group(&self) -> bool {
        self.name == SUPER_GROUP_NAME
    }
}
