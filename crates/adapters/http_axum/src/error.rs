//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lumohub_domain::error::LumoError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`LumoError`] and malformed requests to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Domain(LumoError),
    BadRequest(&'static str),
}

impl From<LumoError> for ApiError {
    fn from(err: LumoError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(reason) => (StatusCode::BAD_REQUEST, (*reason).to_string()),
            Self::Domain(LumoError::UnknownDevice(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(LumoError::Unsupported(err)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::Domain(LumoError::Transport(err)) => {
                tracing::error!(error = %err, source = ?std::error::Error::source(err), "gateway call failed");
                (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumohub_domain::capability::Capability;
    use lumohub_domain::error::{TransportError, UnknownDeviceError, UnsupportedOperationError};
    use lumohub_domain::id::LightId;
    use lumohub_domain::light::Spectrum;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn should_map_each_error_kind_to_a_distinct_status() {
        let unknown = LumoError::from(UnknownDeviceError { id: LightId::new(1) });
        let unsupported = LumoError::from(UnsupportedOperationError {
            id: LightId::new(1),
            capability: Capability::Color,
            spectrum: Spectrum::White,
        });
        let transport = LumoError::from(TransportError::NotConnected);

        assert_eq!(status_of(unknown), StatusCode::NOT_FOUND);
        assert_eq!(status_of(unsupported), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_of(transport), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_of(ApiError::BadRequest("bad")), StatusCode::BAD_REQUEST);
    }
}
