//! JSON REST handlers for groups.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use lumohub_app::ports::Gateway;
use lumohub_domain::summary::GroupSummary;

use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<GroupSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/groups`
pub async fn list<G>(State(state): State<AppState<G>>) -> ListResponse
where
    G: Gateway + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.queries.list_groups()))
}
