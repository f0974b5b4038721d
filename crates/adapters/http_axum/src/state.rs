//! Shared application state for axum handlers.

use std::sync::Arc;

use lumohub_app::ports::Gateway;
use lumohub_app::services::command_service::CommandService;
use lumohub_app::services::query_service::QueryService;

/// Application state shared across all axum handlers.
///
/// Generic over the gateway type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the gateway itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<G> {
    /// Validated light and scene commands.
    pub commands: Arc<CommandService<G>>,
    /// Group and scene listings.
    pub queries: Arc<QueryService>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            commands: Arc::clone(&self.commands),
            queries: Arc::clone(&self.queries),
        }
    }
}

impl<G> AppState<G>
where
    G: Gateway + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(commands: CommandService<G>, queries: QueryService) -> Self {
        Self {
            commands: Arc::new(commands),
            queries: Arc::new(queries),
        }
    }
}
