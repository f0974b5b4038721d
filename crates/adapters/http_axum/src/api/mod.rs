//! JSON REST API handler modules.
//!
//! Command endpoints take plain-text bodies (a fraction, a hex color or a
//! scene id) and answer `200 OK` with an empty body.

#[allow(clippy::missing_errors_doc)]
pub mod admin;
#[allow(clippy::missing_errors_doc)]
pub mod groups;
#[allow(clippy::missing_errors_doc)]
pub mod lights;
#[allow(clippy::missing_errors_doc)]
pub mod scenes;

use std::str::FromStr;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use lumohub_app::ports::Gateway;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<G>() -> Router<AppState<G>>
where
    G: Gateway + Send + Sync + 'static,
{
    Router::new()
        .route("/groups", get(groups::list::<G>))
        .route(
            "/scenes",
            get(scenes::list::<G>).post(scenes::activate::<G>),
        )
        .route("/lights/{id}/brightness", post(lights::brightness::<G>))
        .route("/lights/{id}/temperature", post(lights::temperature::<G>))
        .route("/lights/{id}/color", post(lights::color::<G>))
}

/// Build the `/admin` sub-router.
pub fn admin_routes<G>() -> Router<AppState<G>>
where
    G: Gateway + Send + Sync + 'static,
{
    Router::new().route("/gateway/reboot", post(admin::reboot_gateway::<G>))
}

/// Response of every command endpoint.
pub enum CommandResponse {
    Ok,
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("identifier must be a non-negative integer"))
}

fn parse_fraction(raw: &str) -> Result<f64, ApiError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ApiError::BadRequest("body must be a finite number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumohub_domain::id::LightId;

    #[test]
    fn should_parse_fraction_with_surrounding_whitespace() {
        assert!((parse_fraction(" 0.5\n").unwrap() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_non_finite_fraction() {
        assert!(parse_fraction("NaN").is_err());
        assert!(parse_fraction("inf").is_err());
        assert!(parse_fraction("bright").is_err());
    }

    #[test]
    fn should_reject_negative_id() {
        assert!(parse_id::<LightId>("-4").is_err());
        assert_eq!(parse_id::<LightId>("65537").unwrap(), LightId::new(65_537));
    }
}
