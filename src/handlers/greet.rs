use crate::models::GreetResponse;
use crate::routes;
use axum::{extract::Path, Json};

/// GET /greet/{name} handler - Personalized greeting
///
/// `name` arrives percent-decoded from the path and is echoed back verbatim;
/// serde_json takes care of escaping it inside the response body.
#[utoipa::path(
    get,
    path = routes::GREET,
    params(
        ("name" = String, Path, description = "Name of the person to greet")
    ),
    responses(
        (status = 200, description = "Personalized greeting", body = GreetResponse),
        (status = 400, description = "Path segment is not valid UTF-8 after decoding")
    ),
    tag = "hello"
)]
pub async fn greet_handler(Path(name): Path<String>) -> Json<GreetResponse> {
    tracing::debug!("Greeting {:?}", name);
    Json(GreetResponse {
        message: format!("Hello, {}!", name),
        greeted: name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use proptest::prelude::*;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(routes::GREET, get(greet_handler))
    }

    async fn greet(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_greet_endpoint() {
        let (status, body) = greet("/greet/Alice").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            response_json,
            serde_json::json!({ "message": "Hello, Alice!", "greeted": "Alice" })
        );
    }

    #[tokio::test]
    async fn test_greet_decodes_percent_encoding() {
        let (status, body) = greet("/greet/Jos%C3%A9%20Mar%C3%ADa").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: GreetResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.greeted, "José María");
        assert_eq!(response_json.message, "Hello, José María!");
    }

    #[tokio::test]
    async fn test_greet_escapes_json() {
        let (status, body) = greet("/greet/%22quoted%22%5C").await;

        assert_eq!(status, StatusCode::OK);
        let raw = String::from_utf8(body.clone()).unwrap();
        assert!(raw.contains(r#""greeted":"\"quoted\"\\""#));
        let response_json: GreetResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.greeted, "\"quoted\"\\");
    }

    #[tokio::test]
    async fn test_greet_encoded_slash_stays_in_name() {
        let (status, body) = greet("/greet/a%2Fb").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: GreetResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.greeted, "a/b");
        assert_eq!(response_json.message, "Hello, a/b!");
    }

    #[tokio::test]
    async fn test_greet_raw_slash_not_found() {
        let (status, _) = greet("/greet/a/b").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_greet_empty_name_not_found() {
        let (status, _) = greet("/greet/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_greet_invalid_utf8_bad_request() {
        let (status, _) = greet("/greet/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    proptest! {
        #[test]
        fn prop_greeted_matches_path_segment(name in "[A-Za-z0-9_~-][A-Za-z0-9._~-]{0,31}") {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            let (status, body) = rt.block_on(greet(&format!("/greet/{}", name)));

            prop_assert_eq!(status, StatusCode::OK);
            let response_json: GreetResponse = serde_json::from_slice(&body).unwrap();
            prop_assert_eq!(&response_json.greeted, &name);
            prop_assert_eq!(response_json.message, format!("Hello, {}!", name));
        }
    }
}
