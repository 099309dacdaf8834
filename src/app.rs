use crate::{api_doc::ApiDoc, handlers, routes, state::AppState};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router
///
/// Binds every handler to its path, installs the 404 fallback and request
/// tracing, and mounts the Swagger UI when docs are enabled.
pub fn build_router(state: AppState) -> Router {
    let docs_enabled = state.config.docs_enabled;

    let mut app = Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HELLO, get(handlers::hello_handler))
        .route(routes::VERSION, get(handlers::version_handler))
        .route(routes::STATUS, get(handlers::status_handler))
        .route(routes::GREET, get(handlers::greet_handler))
        .with_state(state);

    if docs_enabled {
        app = app.merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()),
        );
    }

    app.fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
}
