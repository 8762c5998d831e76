use axum::{
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

mod health;
mod tasks;
mod todos;

pub use health::health;

use crate::state::AppState;

/// Router for the task tracker service: task CRUD plus the front-end bundle.
pub fn tracker_routes(static_dir: &Path) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", get(health))
        .route("/tasks", post(tasks::routes::create).get(tasks::routes::list))
        .route(
            "/tasks/{id}",
            put(tasks::routes::update).delete(tasks::routes::delete),
        )
        .layer(cors)
}

/// Router for the todo list service. Only the local dev front-end may call it.
pub fn todo_routes() -> Router<AppState> {
    let origin = "http://localhost:3000"
        .parse::<HeaderValue>()
        .expect("static origin must parse");

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/todos", post(todos::routes::create).get(todos::routes::list))
        .route("/todos/{id}", delete(todos::routes::delete))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    // A client handle parses the URI eagerly but only connects on first use,
    // so routes that reject before any database call are testable without a
    // running store.
    async fn test_state() -> AppState {
        let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap();
        AppState {
            db: client.database("test"),
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = todo_routes().with_state(test_state().await);

        let res = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 200);
    }

    #[tokio::test]
    async fn update_with_malformed_id_is_bad_request() {
        let app = tracker_routes(Path::new("static")).with_state(test_state().await);

        let res = app
            .oneshot(
                Request::put("/tasks/not-an-id")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Invalid task id");
    }

    #[tokio::test]
    async fn delete_with_malformed_id_is_bad_request() {
        let app = todo_routes().with_state(test_state().await);

        let res = app
            .oneshot(
                Request::delete("/todos/zzz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Invalid todo id");
    }

    #[tokio::test]
    async fn create_todo_without_content_is_rejected_by_extractor() {
        let app = todo_routes().with_state(test_state().await);

        let res = app
            .oneshot(
                Request::post("/todos")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
