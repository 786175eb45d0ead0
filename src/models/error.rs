use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Per-request failure taxonomy. Each variant maps to exactly one
/// HTTP response; 4xx tells the pusher not to retry, 5xx asks it to.
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("read request: {0}")]
    Read(#[source] axum::Error),

    #[error("unmarshal envelope: {0}")]
    DecodeEnvelope(#[source] anyhow::Error),

    #[error("unmarshal build: {0}")]
    DecodeBuild(#[source] anyhow::Error),

    #[error("post message: {0}")]
    Delivery(#[source] anyhow::Error),
}

impl IntoResponse for HandleError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HandleError::Read(_) => (StatusCode::BAD_REQUEST, "read request"),
            HandleError::DecodeEnvelope(_) => (StatusCode::BAD_REQUEST, "unmarshal envelope"),
            HandleError::DecodeBuild(_) => (StatusCode::BAD_REQUEST, "unmarshal build"),
            HandleError::Delivery(_) => (StatusCode::INTERNAL_SERVER_ERROR, "post message"),
        };

        (status, body).into_response()
    }
}
