use crate::models::VersionResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /version handler - Report the application version
#[utoipa::path(
    get,
    path = routes::VERSION,
    responses(
        (status = 200, description = "Application version", body = VersionResponse)
    ),
    tag = "health"
)]
pub async fn version_handler(State(state): State<AppState>) -> Json<VersionResponse> {
    tracing::debug!("Reporting version {}", state.config.version);
    Json(VersionResponse {
        version: state.config.version.clone(),
    })
}
