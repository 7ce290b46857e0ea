use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-time failures. Startup failures go through `anyhow` instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),
    #[error("invalid value {value:?} for query parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::debug!("rejecting request: {}", self);
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
