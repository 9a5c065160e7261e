//! HTTP integration tests for buildings, blocks, floors and rooms.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, post_json, put_json, seed_floor};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_building_crud_round(pool: PgPool) {
    let app = common::build_test_app(pool);

    let building = create(&app, "/api/v1/buildings", json!({"name": "North Hostel"})).await;
    let id = building["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/v1/buildings/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "North Hostel");

    let response = put_json(
        app.clone(),
        &format!("/api/v1/buildings/{id}"),
        json!({"name": "South Hostel"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "South Hostel");

    let response = get(app.clone(), "/api/v1/buildings").await;
    let list = body_json(response).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let response = delete(app.clone(), &format!("/api/v1/buildings/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/buildings/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_building_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/buildings", json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blocks_of_missing_building_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/buildings/9999/blocks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_block_with_unknown_building_is_invalid_reference(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/blocks",
        json!({"building_id": 4242, "name": "Block A"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

// ---------------------------------------------------------------------------
// Floors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_floors_listed_with_labels_and_room_counts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let floor = seed_floor(&app, "Block A", 2).await;
    let block_id = floor["block_id"].as_i64().unwrap();
    let floor_id = floor["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/floors/{floor_id}/room-count"),
        json!({"count": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/v1/blocks/{block_id}/floors")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let floors = body_json(response).await;
    let first = &floors["data"][0];
    assert_eq!(first["floor_number"], 2);
    assert_eq!(first["label"], "2nd Floor");
    assert_eq!(first["room_count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_floor_number_is_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    let floor = seed_floor(&app, "Block A", 1).await;

    let response = post_json(
        app,
        "/api/v1/floors",
        json!({"block_id": floor["block_id"], "floor_number": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_floor_number_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let floor = seed_floor(&app, "Block A", 1).await;

    let response = post_json(
        app,
        "/api/v1/floors",
        json!({"block_id": floor["block_id"], "floor_number": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Room-count resize
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resize_adds_then_removes_rooms(pool: PgPool) {
    let (app, bus) = common::build_test_app_with_bus(pool);
    let floor = seed_floor(&app, "Block B", 3).await;
    let floor_id = floor["id"].as_i64().unwrap();
    let mut events = bus.subscribe();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/floors/{floor_id}/room-count"),
        json!({"count": 4}),
    )
    .await;
    let change = body_json(response).await;
    assert_eq!(change["data"]["added"], 4);
    assert_eq!(change["data"]["room_count"], 4);

    let event = events.recv().await.unwrap();
    assert_eq!(event.event_type, "floor.rooms_resized");
    assert_eq!(event.entity_id, Some(floor_id));

    let response = put_json(
        app.clone(),
        &format!("/api/v1/floors/{floor_id}/room-count"),
        json!({"count": 2}),
    )
    .await;
    let change = body_json(response).await;
    assert_eq!(change["data"]["removed"], 2);

    let response = get(app, &format!("/api/v1/floors/{floor_id}/rooms")).await;
    let rooms = body_json(response).await;
    let names: Vec<&str> = rooms["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["B-301", "B-302"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resize_beyond_limit_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let floor = seed_floor(&app, "Block C", 1).await;

    let response = put_json(
        app,
        &format!("/api/v1/floors/{}/room-count", floor["id"]),
        json!({"count": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resize_missing_floor_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/floors/5555/room-count", json!({"count": 2})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_room_crud_round(pool: PgPool) {
    let (app, bus) = common::build_test_app_with_bus(pool);
    let floor = seed_floor(&app, "Block D", 1).await;
    let mut events = bus.subscribe();

    let room = create(
        &app,
        "/api/v1/rooms",
        json!({"floor_id": floor["id"], "name": "D-101"}),
    )
    .await;
    assert_eq!(room["block_id"], floor["block_id"]);
    let id = room["id"].as_i64().unwrap();

    let event = events.recv().await.unwrap();
    assert_eq!(event.event_type, "room.created");

    let response = put_json(
        app.clone(),
        &format!("/api/v1/rooms/{id}"),
        json!({"name": "D-101A"}),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["name"], "D-101A");

    let response = delete(app.clone(), &format!("/api/v1/rooms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app, &format!("/api/v1/rooms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_room_on_missing_floor_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/rooms",
        json!({"floor_id": 31337, "name": "X-101"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_room_delete_clears_marks_and_drops_room_holidays(pool: PgPool) {
    let app = common::build_test_app(pool);
    let floor = seed_floor(&app, "Block E", 1).await;
    let room = create(
        &app,
        "/api/v1/rooms",
        json!({"floor_id": floor["id"], "name": "E-101"}),
    )
    .await;
    let room_id = room["id"].as_i64().unwrap();

    let student = create(
        &app,
        "/api/v1/students",
        json!({
            "name": "Asha Rao",
            "registration_no": "REG-701",
            "phone_number": "9876543210",
            "room_id": room_id,
        }),
    )
    .await;
    let response = put_json(
        app.clone(),
        "/api/v1/attendance",
        json!({"student_id": student["id"], "status": "A", "date": "2025-04-15"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    create(
        &app,
        "/api/v1/attendance/holidays",
        json!({"date": "2025-04-15", "room_id": room_id}),
    )
    .await;

    let response = delete(app.clone(), &format!("/api/v1/rooms/{room_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/v1/attendance?date=2025-04-15").await;
    let rows = body_json(response).await["data"].clone();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_id"], student["id"]);
    assert_eq!(rows[0]["status"], "A");
    assert!(rows[0]["room_id"].is_null());
}
