use crate::models::MessageResponse;
use crate::routes;
use axum::Json;

fn hello_world() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, World!".to_string(),
    })
}

/// GET / handler - Hello world message
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Hello world message", body = MessageResponse)
    ),
    tag = "hello"
)]
pub async fn root_handler() -> Json<MessageResponse> {
    tracing::debug!("Saying hello from /");
    hello_world()
}

/// GET /hello handler - Same body as `/`
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Hello world message", body = MessageResponse)
    ),
    tag = "hello"
)]
pub async fn hello_handler() -> Json<MessageResponse> {
    tracing::debug!("Saying hello from /hello");
    hello_world()
}
