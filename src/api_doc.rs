use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{GreetResponse, MessageResponse, StatusResponse, VersionResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-service API",
        version = "1.0.0",
        description = "Version, health and greeting endpoints"
    ),
    paths(
        handlers::version::version_handler,
        handlers::status::status_handler,
        handlers::hello::root_handler,
        handlers::hello::hello_handler,
        handlers::greet::greet_handler
    ),
    components(
        schemas(
            VersionResponse,
            StatusResponse,
            MessageResponse,
            GreetResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Version and health check operations"),
        (name = "hello", description = "Greeting operations")
    )
)]
pub struct ApiDoc;
