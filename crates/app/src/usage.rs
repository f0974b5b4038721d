//! Thread-safe wrapper around the domain [`UsageRanker`] for scenes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lumohub_domain::id::SceneId;
use lumohub_domain::scene::Scene;
use lumohub_domain::usage::UsageRanker;

/// Scene activation counts shared between the command and query services.
#[derive(Debug, Default)]
pub struct SceneUsage {
    ranker: Mutex<UsageRanker<SceneId>>,
}

impl SceneUsage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_usage(&self, id: SceneId) {
        self.lock().register_usage(id);
    }

    #[must_use]
    pub fn usage(&self, id: SceneId) -> u64 {
        self.lock().usage(&id)
    }

    /// Most activated scenes first, alphabetical among ties.
    #[must_use]
    pub fn sort(&self, scenes: Vec<Scene>) -> Vec<Scene> {
        self.lock().sort(scenes)
    }

    fn lock(&self) -> MutexGuard<'_, UsageRanker<SceneId>> {
        self.ranker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
