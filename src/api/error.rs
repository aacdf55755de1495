use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error taxonomy surfaced by the HTTP layer.
///
/// Every variant renders as the JSON envelope `{"error": <message>}`; no
/// error ever leaves the service as an unstructured response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required parameter missing/empty, or an extraneous parameter on an
    /// exclusive operation. Maps to 400.
    #[error("{0}")]
    Validation(String),
    /// Well-formed query with zero matches. Maps to 404.
    #[error("{0}")]
    NotFound(String),
    /// Anything else. Maps to 500 with a generic message; the detail is
    /// logged, never sent to the client.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}
