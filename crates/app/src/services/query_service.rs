//! Query service — read models built from the cache.

use std::sync::Arc;

use lumohub_domain::summary::{GroupSummary, LightSummary, SceneSummary};

use crate::cache::LightCache;
use crate::usage::SceneUsage;

/// Application service answering group and scene listings.
pub struct QueryService {
    cache: Arc<LightCache>,
    usage: Arc<SceneUsage>,
}

impl QueryService {
    pub fn new(cache: Arc<LightCache>, usage: Arc<SceneUsage>) -> Self {
        Self { cache, usage }
    }

    /// Regular groups ordered by name, each with the member lights that are
    /// currently known. The super-group is never listed.
    #[must_use]
    pub fn list_groups(&self) -> Vec<GroupSummary> {
        self.cache
            .groups()
            .into_iter()
            .map(|group| GroupSummary {
                lights: self
                    .cache
                    .members_of(&group)
                    .iter()
                    .map(LightSummary::from)
                    .collect(),
                name: group.name,
            })
            .collect()
    }

    /// Cached scenes, most activated first.
    #[must_use]
    pub fn list_scenes(&self) -> Vec<SceneSummary> {
        self.usage
            .sort(self.cache.scenes())
            .into_iter()
            .map(SceneSummary::from)
            .collect()
    }
}
