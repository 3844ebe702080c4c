// http_api.rs — GoalClient over real HTTP.
//
// The goals daemon router runs on an ephemeral port; the client talks to it
// through HttpBackend exactly as the CLI does. Stub routers cover responses
// the real daemon never produces (altered echo text, non-JSON errors).

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use goals_client::{ClientError, GoalClient, GoalsBackend, HttpBackend};
use goals_core::{Goal, GoalId, GoalService, MemoryStore, StoreHandle};
use goals_daemon::api::{self, AppState};
use serde_json::json;
use tokio::net::TcpListener;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_daemon() -> (String, StoreHandle) {
    let store = StoreHandle::from_store(MemoryStore::new());
    let state = AppState::new(GoalService::new(store.clone()));
    (spawn(api::router(state, true)).await, store)
}

#[tokio::test]
async fn load_add_delete_against_daemon() {
    let (url, store) = spawn_daemon().await;
    let seeded = store.insert("Learn stuff").await.unwrap();

    let mut client = GoalClient::new(HttpBackend::new(&url).unwrap());

    let state = client.load().await;
    assert_eq!(state.goals(), &[Goal::new(seeded.id.clone(), "Learn stuff")]);
    assert_eq!(state.error(), None);

    let state = client.add_goal("Finish course").await;
    assert_eq!(state.goals().len(), 2);
    assert_eq!(state.goals()[0].text, "Finish course");
    let new_id = state.goals()[0].id.clone();

    let state = client.delete_goal(&seeded.id).await;
    assert_eq!(state.goals(), &[Goal::new(new_id.clone(), "Finish course")]);

    // The server agrees with the mirror.
    let server_side = client.backend().list().await.unwrap();
    assert_eq!(server_side, vec![Goal::new(new_id, "Finish course")]);
}

#[tokio::test]
async fn blank_text_shows_server_message() {
    let (url, _store) = spawn_daemon().await;
    let mut client = GoalClient::new(HttpBackend::new(&url).unwrap());
    client.load().await;

    let state = client.add_goal("   ").await;
    assert!(state.goals().is_empty());
    assert_eq!(state.error(), Some("Invalid goal text."));
}

#[tokio::test]
async fn deleting_unknown_id_succeeds() {
    let (url, _store) = spawn_daemon().await;
    let backend = HttpBackend::new(&url).unwrap();
    backend.delete(&GoalId::from("does/not exist")).await.unwrap();
}

#[tokio::test]
async fn store_outage_surfaces_fixed_message() {
    let (url, store) = spawn_daemon().await;
    store.close().await.unwrap();

    let mut client = GoalClient::new(HttpBackend::new(&url).unwrap());
    let state = client.load().await;
    assert!(state.goals().is_empty());
    assert_eq!(state.error(), Some("Failed to load goals."));
    assert!(!state.is_busy());
}

#[tokio::test]
async fn added_goal_ignores_echoed_text() {
    let app = Router::new().route(
        "/goals",
        get(|| async { Json(json!({"goals": [{"id": "1", "text": "Learn stuff"}]})) }).post(
            || async { (StatusCode::CREATED, Json(json!({"goal": {"id": "2", "text": "SHOUTED"}}))) },
        ),
    );
    let url = spawn(app).await;
    let mut client = GoalClient::new(HttpBackend::new(&url).unwrap());
    client.load().await;

    let state = client.add_goal("Finish course").await;
    assert_eq!(
        state.goals(),
        &[Goal::new("2", "Finish course"), Goal::new("1", "Learn stuff")]
    );
}

#[tokio::test]
async fn failed_add_banner_survives_reload() {
    let app = Router::new().route(
        "/goals",
        get(|| async { Json(json!({"goals": [{"id": "1", "text": "Learn stuff"}]})) }).post(
            || async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "Failed to save goal."})),
                )
            },
        ),
    );
    let url = spawn(app).await;
    let mut client = GoalClient::new(HttpBackend::new(&url).unwrap());

    let state = client.add_goal("Finish course").await;
    assert_eq!(state.error(), Some("Failed to save goal."));

    let state = client.load().await;
    assert_eq!(state.goals(), &[Goal::new("1", "Learn stuff")]);
    assert_eq!(state.error(), Some("Failed to save goal."));
    let rendered = state.view().to_string();
    assert!(rendered.starts_with("Error: Failed to save goal.\n"));
    assert!(rendered.contains("Learn stuff"));
}

#[tokio::test]
async fn error_without_message_uses_operation_default() {
    let app = Router::new().route(
        "/goals",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
    );
    let url = spawn(app).await;
    let mut client = GoalClient::new(HttpBackend::new(&url).unwrap());

    let state = client.load().await;
    assert_eq!(state.error(), Some("Fetching the goals failed."));
}

#[tokio::test]
async fn non_json_body_is_a_parse_failure() {
    let app = Router::new().route(
        "/goals",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let url = spawn(app).await;
    let backend = HttpBackend::new(&url).unwrap();

    let err = backend.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));

    let mut client = GoalClient::new(backend);
    let state = client.load().await;
    let banner = state.error().unwrap();
    assert!(!banner.is_empty());
    assert_ne!(banner, "Fetching the goals failed.");
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(&format!("http://{}", addr)).unwrap();
    let err = backend.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));

    let mut client = GoalClient::new(backend);
    let state = client.load().await;
    assert!(state.error().is_some());
    assert!(!state.is_busy());
}
