// src/server/handlers/mod.rs
//! HTTP request handlers for the Pantry server

pub mod home;
pub mod ingredients;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Error response body (RFC 7807)
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    /// Error type URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable title
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Detailed description
    pub detail: String,
}

impl Problem {
    pub fn new(error_type: &str, title: &str, status: u16, detail: &str) -> Self {
        Self {
            error_type: format!("urn:pantry:error:{}", error_type),
            title: title.to_string(),
            status,
            detail: detail.to_string(),
        }
    }

    /// Internal error
    pub fn internal(detail: &str) -> Self {
        Self::new("internal", "Internal Error", 500, detail)
    }
}

/// Error returned from handlers; rendered as problem+json
#[derive(Debug)]
pub struct ApiError(pub Problem);

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        tracing::error!("Request failed: {}", err);
        ApiError(Problem::internal(&err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [("content-type", "application/problem+json")],
            Json(self.0),
        )
            .into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Run blocking database work off the async executor
pub async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!("Blocking task failed: {}", e);
        ApiError(Problem::internal(&format!("Task join error: {}", e)))
    })?;

    Ok(result?)
}
