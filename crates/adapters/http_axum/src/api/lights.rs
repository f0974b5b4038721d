//! Plain-text command handlers for individual lights.

use axum::extract::{Path, State};

use lumohub_app::ports::Gateway;
use lumohub_domain::id::LightId;

use super::{CommandResponse, parse_fraction, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/lights/{id}/brightness` with a fraction in `[0, 1]`.
pub async fn brightness<G>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    body: String,
) -> Result<CommandResponse, ApiError>
where
    G: Gateway + Send + Sync + 'static,
{
    let light_id: LightId = parse_id(&id)?;
    let fraction = parse_fraction(&body)?;
    state.commands.set_brightness(light_id, fraction).await?;
    Ok(CommandResponse::Ok)
}

/// `POST /api/lights/{id}/temperature` with a fraction in `[0, 1]`.
pub async fn temperature<G>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    body: String,
) -> Result<CommandResponse, ApiError>
where
    G: Gateway + Send + Sync + 'static,
{
    let light_id: LightId = parse_id(&id)?;
    let fraction = parse_fraction(&body)?;
    state.commands.set_temperature(light_id, fraction).await?;
    Ok(CommandResponse::Ok)
}

/// `POST /api/lights/{id}/color` with a hex color, `#` optional.
pub async fn color<G>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    body: String,
) -> Result<CommandResponse, ApiError>
where
    G: Gateway + Send + Sync + 'static,
{
    let light_id: LightId = parse_id(&id)?;
    let hex = body.trim();
    if hex.is_empty() {
        return Err(ApiError::BadRequest("body must be a hex color"));
    }
    state.commands.set_color(light_id, hex).await?;
    Ok(CommandResponse::Ok)
}
