use crate::error::ApiError;
use axum::http::Uri;

/// Router fallback for paths that match no route
pub async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::NotFound(uri.path().to_string())
}
