//! Route handlers

pub mod graphql;
pub mod health;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full HTTP application
pub fn app(state: AppState) -> Router {
    let graphiql = state.graphiql_enabled();
    Router::new()
        .merge(health::router())
        .merge(graphql::router(graphiql))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    async fn test_app(config: ServerConfig) -> Router {
        app(AppState::new(&config).await.unwrap())
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post_graphql(app: &Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    #[tokio::test]
    async fn test_health_reports_seeded_tasks() {
        let app = test_app(ServerConfig::default()).await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["taskCount"], 3);
    }

    #[tokio::test]
    async fn test_unseeded_store_starts_empty() {
        let app = test_app(ServerConfig {
            seed: false,
            ..ServerConfig::default()
        })
        .await;
        let (status, body) = post_graphql(&app, json!({ "query": "{ todoList { id } }" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["todoList"], json!([]));
    }

    #[tokio::test]
    async fn test_store_seeded_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        std::fs::write(&path, r#"[{"id": 7, "name": "From file", "completed": true}]"#).unwrap();

        let app = test_app(ServerConfig {
            seed_file: Some(path),
            ..ServerConfig::default()
        })
        .await;
        let (_, body) = post_graphql(&app, json!({ "query": "{ todoList { id name completed } }" })).await;
        assert_eq!(
            body["data"]["todoList"],
            json!([{ "id": 7, "name": "From file", "completed": true }])
        );
    }

    #[tokio::test]
    async fn test_invalid_seed_file_fails_startup() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "ab"}]"#).unwrap();

        let config = ServerConfig {
            seed_file: Some(path),
            ..ServerConfig::default()
        };
        assert!(AppState::new(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_mutation_errors_are_http_success() {
        let app = test_app(ServerConfig::default()).await;
        let (status, body) = post_graphql(
            &app,
            json!({
                "query": "mutation($id: Int!) { deleteItem(id: $id) { status message code } }",
                "variables": { "id": 999 },
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("errors").is_none());
        assert_eq!(
            body["data"]["deleteItem"],
            json!({ "status": "error", "message": "Item not found", "code": "NOT_FOUND_ERROR" })
        );
    }

    #[tokio::test]
    async fn test_state_is_shared_across_requests() {
        let app = test_app(ServerConfig::default()).await;
        let (_, body) = post_graphql(
            &app,
            json!({
                "query": "mutation($values: ItemInput) { addItem(values: $values) { code } }",
                "variables": { "values": { "name": "Write tests" } },
            }),
        )
        .await;
        assert_eq!(body["data"]["addItem"]["code"], "OK");

        let (_, body) = post_graphql(
            &app,
            json!({ "query": r#"{ todoList(filter: { name: "TESTS" }) { id name completed } }"# }),
        )
        .await;
        assert_eq!(
            body["data"]["todoList"],
            json!([{ "id": 4, "name": "Write tests", "completed": false }])
        );
    }

    #[tokio::test]
    async fn test_graphiql_page() {
        let app = test_app(ServerConfig::default()).await;
        let response = app
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_graphiql_can_be_disabled() {
        let app = test_app(ServerConfig {
            graphiql: false,
            ..ServerConfig::default()
        })
        .await;
        let response = app
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
