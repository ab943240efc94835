//! Request-time errors and their HTTP rendering.
//!
//! Every failure leaves the API as `{"error": "<message>"}` with the status
//! code matching the variant.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or one of its fields is invalid.
    #[error("{0}")]
    BadRequest(String),

    /// The request was valid but refers to data that was never precomputed.
    #[error("{0}")]
    NotFound(String),

    /// Postgres or Elasticsearch failed to answer.
    #[error("backend failure: {0}")]
    Backend(String),

    /// A fan-out did not finish within the configured deadline.
    #[error("query timed out after {0} seconds")]
    Timeout(u64),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
