use crate::models::StatusResponse;
use crate::routes;
use axum::Json;

/// GET /status handler - Health check endpoint
///
/// The service has no backing dependencies, so it is healthy whenever it is
/// able to answer.
#[utoipa::path(
    get,
    path = routes::STATUS,
    responses(
        (status = 200, description = "Service is healthy", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn status_handler() -> Json<StatusResponse> {
    tracing::debug!("Health check passed");
    Json(StatusResponse {
        status: "healthy".to_string(),
        message: "Application is running".to_string(),
    })
}
