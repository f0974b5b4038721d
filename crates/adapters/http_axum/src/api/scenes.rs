//! JSON REST handlers for scenes.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use lumohub_app::ports::Gateway;
use lumohub_domain::id::SceneId;
use lumohub_domain::summary::SceneSummary;

use super::{CommandResponse, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SceneSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/scenes`, most used first.
pub async fn list<G>(State(state): State<AppState<G>>) -> ListResponse
where
    G: Gateway + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.queries.list_scenes()))
}

/// `POST /api/scenes` with the scene id as the plain-text body.
pub async fn activate<G>(
    State(state): State<AppState<G>>,
    body: String,
) -> Result<CommandResponse, ApiError>
where
    G: Gateway + Send + Sync + 'static,
{
    let scene_id: SceneId = parse_id(&body)?;
    state.commands.activate_scene(scene_id).await?;
    Ok(CommandResponse::Ok)
}
