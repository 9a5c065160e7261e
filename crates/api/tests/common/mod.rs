#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use hostel_api::config::{LogFormat, ServerConfig};
use hostel_api::router::build_app_router;
use hostel_api::state::AppState;
use hostel_api::ws::WsManager;
use hostel_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 5,
    }
}

/// Build the full application router over `pool`, returning the event bus
/// so tests can observe published changes.
pub fn build_test_app_with_bus(pool: PgPool) -> (Router, Arc<EventBus>) {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ws_manager: Arc::new(WsManager::new()),
        event_bus: Arc::clone(&event_bus),
    };

    (build_app_router(state, &config), event_bus)
}

/// Build the full application router, with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_bus(pool).0
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");
    app.oneshot(request).await.expect("infallible router")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// POST and return the created entity's `data` object, asserting 201.
pub async fn create(app: &Router, uri: &str, json: serde_json::Value) -> serde_json::Value {
    let response = post_json(app.clone(), uri, json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await["data"].clone()
}

/// Create building -> block -> floor and return the floor's JSON.
pub async fn seed_floor(app: &Router, block_name: &str, floor_number: i32) -> serde_json::Value {
    let building = create(app, "/api/v1/buildings", serde_json::json!({"name": "North Hostel"})).await;
    let block = create(
        app,
        "/api/v1/blocks",
        serde_json::json!({"building_id": building["id"], "name": block_name}),
    )
    .await;
    create(
        app,
        "/api/v1/floors",
        serde_json::json!({"block_id": block["id"], "floor_number": floor_number}),
    )
    .await
}
