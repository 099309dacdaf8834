use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// None of the endpoints can fail on a request that matches their route, so
/// the only error produced here is for paths that match no route at all.
/// Method mismatches (405) and undecodable path segments (400) are left to
/// axum's own rejections.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request path
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("Not found: {}", path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
