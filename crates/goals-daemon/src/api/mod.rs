mod dto;
mod error;
mod handlers;
mod state;

pub use error::ApiError;
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    response::Response,
    routing::{delete, get},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

/// Target of the per-request access records.
pub const ACCESS_TARGET: &str = "goals_daemon::access";

/// Build the application router
pub fn router(state: Arc<AppState>, cors: bool) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                path = %req.uri().path(),
            )
        })
        .on_request(())
        .on_response(|res: &Response, latency: Duration, _span: &Span| {
            tracing::info!(
                target: ACCESS_TARGET,
                status = res.status().as_u16(),
                latency_ms = latency.as_millis() as u64,
                "request completed"
            );
        });

    let router = Router::new()
        .route("/goals", get(handlers::list_goals).post(handlers::create_goal))
        .route("/goals/{id}", delete(handlers::delete_goal))
        .route("/health", get(handlers::health))
        .layer(trace);

    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };
    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use goals_core::{GoalService, MemoryStore, StoreHandle};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> (Router, StoreHandle) {
        let store = StoreHandle::from_store(MemoryStore::new());
        let state = AppState::new(GoalService::new(store.clone()));
        (router(state, true), store)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let (app, _) = test_app();
        let (status, body) = send(&app, Method::GET, "/goals", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"goals": []}));
    }

    #[tokio::test]
    async fn create_returns_201_with_submitted_text() {
        let (app, _) = test_app();
        let (status, body) =
            send(&app, Method::POST, "/goals", Some(json!({"text": " Finish course "}))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Goal saved");
        assert_eq!(body["goal"]["text"], " Finish course ");
        let id = body["goal"]["id"].as_str().unwrap().to_string();

        let (_, listed) = send(&app, Method::GET, "/goals", None).await;
        assert_eq!(listed, json!({"goals": [{"id": id, "text": " Finish course "}]}));
    }

    #[tokio::test]
    async fn blank_missing_or_malformed_text_is_422() {
        let (app, _) = test_app();
        for body in [json!({"text": ""}), json!({"text": "   "}), json!({}), json!({"text": 7})] {
            let (status, resp) = send(&app, Method::POST, "/goals", Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(resp, json!({"message": "Invalid goal text."}));
        }

        let req = Request::builder()
            .method(Method::POST)
            .uri("/goals")
            .body(Body::from("not json"))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let (_, listed) = send(&app, Method::GET, "/goals", None).await;
        assert_eq!(listed, json!({"goals": []}));
    }

    #[tokio::test]
    async fn delete_is_soft_and_repeatable() {
        let (app, _) = test_app();
        let (_, a) = send(&app, Method::POST, "/goals", Some(json!({"text": "a"}))).await;
        let (_, b) = send(&app, Method::POST, "/goals", Some(json!({"text": "b"}))).await;
        let a_id = a["goal"]["id"].as_str().unwrap();
        let b_id = b["goal"]["id"].as_str().unwrap();

        for _ in 0..2 {
            let (status, body) = send(&app, Method::DELETE, &format!("/goals/{}", a_id), None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"message": "Deleted goal!"}));
        }
        let (status, _) = send(&app, Method::DELETE, "/goals/not-a-real-id", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, listed) = send(&app, Method::GET, "/goals", None).await;
        assert_eq!(listed, json!({"goals": [{"id": b_id, "text": "b"}]}));
    }

    #[tokio::test]
    async fn store_failures_are_500_with_fixed_messages() {
        let (app, store) = test_app();
        store.close().await.unwrap();

        let (status, body) = send(&app, Method::GET, "/goals", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Failed to load goals."}));

        let (status, body) = send(&app, Method::POST, "/goals", Some(json!({"text": "x"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Failed to save goal."}));

        let (status, body) = send(&app, Method::DELETE, "/goals/x", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Failed to delete goal."}));
    }

    #[tokio::test]
    async fn invalid_text_is_422_even_when_store_is_down() {
        let (app, store) = test_app();
        store.close().await.unwrap();
        let (status, _) = send(&app, Method::POST, "/goals", Some(json!({"text": " "}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (app, _) = test_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let (app, _) = test_app();
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/goals")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
