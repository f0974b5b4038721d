//! Gateway maintenance handlers.

use axum::extract::State;

use lumohub_app::ports::Gateway;

use super::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /admin/gateway/reboot`
pub async fn reboot_gateway<G>(
    State(state): State<AppState<G>>,
) -> Result<CommandResponse, ApiError>
where
    G: Gateway + Send + Sync + 'static,
{
    tracing::info!("gateway reboot requested");
    state.commands.reboot_gateway().await?;
    Ok(CommandResponse::Ok)
}
