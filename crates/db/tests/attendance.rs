//! Integration tests for attendance marking and holiday markers.

use chrono::NaiveDate;
use hostel_core::attendance::{aggregate_month, resolve_day, AttendanceStatus};
use hostel_core::calendar::{holiday_period_dates, YearMonth};
use hostel_db::models::attendance::{AttendanceFilter, MarkAttendance};
use hostel_db::models::student::CreateStudent;
use hostel_db::repositories::{AttendanceRepo, FloorRepo, StudentRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

async fn new_student(pool: &PgPool, name: &str, reg: &str) -> i64 {
    StudentRepo::create(
        pool,
        &CreateStudent {
            name: name.to_string(),
            registration_no: reg.to_string(),
            phone_number: "9123456780".to_string(),
            parent_phone_number: Some("9000000001".to_string()),
            photo_url: None,
            building_name: None,
            block_name: None,
            floor_number: None,
            room_number: None,
            room_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn mark(student_id: i64, status: AttendanceStatus, date: &str) -> MarkAttendance {
    MarkAttendance {
        student_id,
        status,
        date: d(date),
        room_id: None,
    }
}

// ---------------------------------------------------------------------------
// Test: upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_marking_twice_keeps_one_row(pool: PgPool) {
    let student_id = new_student(&pool, "Ravi Kumar", "REG-100").await;

    let first = AttendanceRepo::upsert_for_student(
        &pool,
        &mark(student_id, AttendanceStatus::Present, "2025-04-10"),
    )
    .await
    .unwrap();
    let second = AttendanceRepo::upsert_for_student(
        &pool,
        &mark(student_id, AttendanceStatus::Absent, "2025-04-10"),
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, "A");

    let rows = AttendanceRepo::list(
        &pool,
        &AttendanceFilter {
            student_id: Some(student_id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(rows.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_for_student(pool: PgPool) {
    let student_id = new_student(&pool, "Meera Iyer", "REG-101").await;
    AttendanceRepo::upsert_for_student(
        &pool,
        &mark(student_id, AttendanceStatus::Leave, "2025-04-11"),
    )
    .await
    .unwrap();

    let found = AttendanceRepo::find_for_student(&pool, student_id, d("2025-04-11"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.status, "L");
    assert!(
        AttendanceRepo::find_for_student(&pool, student_id, d("2025-04-12"))
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_status_rejected_by_check(pool: PgPool) {
    let result = sqlx::query("INSERT INTO attendance (status, date) VALUES ('X', '2025-04-10')")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "status outside P/A/L/H should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_student_removes_attendance(pool: PgPool) {
    let student_id = new_student(&pool, "Kiran Das", "REG-102").await;
    AttendanceRepo::upsert_for_student(
        &pool,
        &mark(student_id, AttendanceStatus::Present, "2025-04-10"),
    )
    .await
    .unwrap();

    assert!(StudentRepo::delete(&pool, student_id).await.unwrap());
    let rows = AttendanceRepo::list(&pool, &AttendanceFilter::default())
        .await
        .unwrap();
    assert!(rows.is_empty());
}

// ---------------------------------------------------------------------------
// Test: holidays
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_holiday_overrides_month_view(pool: PgPool) {
    let student_id = new_student(&pool, "Sana Sheikh", "REG-103").await;
    AttendanceRepo::upsert_for_student(
        &pool,
        &mark(student_id, AttendanceStatus::Present, "2025-04-10"),
    )
    .await
    .unwrap();
    AttendanceRepo::insert_holiday(&pool, d("2025-04-10"), None)
        .await
        .unwrap();

    let month = YearMonth::new(2025, 4).unwrap();
    let rows = AttendanceRepo::list_between(&pool, month.first_day(), month.last_day(), None)
        .await
        .unwrap();
    let view = aggregate_month(&rows, month);
    assert_eq!(view.get(&d("2025-04-10")), Some(&AttendanceStatus::Holiday));

    let day = resolve_day(&rows, d("2025-04-10"));
    assert!(day.holiday);
    assert_eq!(day.display_for(student_id), "P");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_holiday_period_inserts_one_marker_per_day(pool: PgPool) {
    let dates = holiday_period_dates(d("2025-04-10"), d("2025-04-12")).unwrap();
    let records = AttendanceRepo::insert_holiday_period(&pool, &dates, None)
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.student_id.is_none() && r.status == "H"));

    let month = YearMonth::new(2025, 4).unwrap();
    let rows = AttendanceRepo::list_between(&pool, month.first_day(), month.last_day(), None)
        .await
        .unwrap();
    let view = aggregate_month(&rows, month);
    for day in ["2025-04-10", "2025-04-11", "2025-04-12"] {
        assert_eq!(view.get(&d(day)), Some(&AttendanceStatus::Holiday));
    }
    assert_eq!(view.get(&d("2025-04-13")), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_day_excludes_other_rooms_holidays(pool: PgPool) {
    sqlx::raw_sql(
        "INSERT INTO buildings (name) VALUES ('H');
         INSERT INTO blocks (building_id, name) SELECT id, 'Block A' FROM buildings;
         INSERT INTO floors (block_id, floor_number) SELECT id, 1 FROM blocks;
         INSERT INTO rooms (block_id, floor_id, name) SELECT block_id, id, 'A-101' FROM floors;
         INSERT INTO rooms (block_id, floor_id, name) SELECT block_id, id, 'A-102' FROM floors;",
    )
    .execute(&pool)
    .await
    .unwrap();
    let rooms: Vec<(i64,)> = sqlx::query_as("SELECT id FROM rooms ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    let (room_a, room_b) = (rooms[0].0, rooms[1].0);

    AttendanceRepo::insert_holiday(&pool, d("2025-04-10"), Some(room_b))
        .await
        .unwrap();

    let rows = AttendanceRepo::list_for_day(&pool, d("2025-04-10"), Some(room_a))
        .await
        .unwrap();
    assert!(rows.is_empty());

    let rows = AttendanceRepo::list_for_day(&pool, d("2025-04-10"), Some(room_b))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shrinking_floor_drops_room_holidays(pool: PgPool) {
    sqlx::raw_sql(
        "INSERT INTO buildings (name) VALUES ('H');
         INSERT INTO blocks (building_id, name) SELECT id, 'Block A' FROM buildings;
         INSERT INTO floors (block_id, floor_number) SELECT id, 1 FROM blocks;",
    )
    .execute(&pool)
    .await
    .unwrap();
    let floor_id: i64 = sqlx::query_scalar("SELECT id FROM floors")
        .fetch_one(&pool)
        .await
        .unwrap();
    FloorRepo::resize_rooms(&pool, floor_id, 2).await.unwrap();
    let rooms: Vec<i64> = sqlx::query_scalar("SELECT id FROM rooms ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    let (room_a, room_b) = (rooms[0], rooms[1]);

    let student_id = new_student(&pool, "Asha Rao", "REG-900").await;
    AttendanceRepo::upsert_for_student(
        &pool,
        &MarkAttendance {
            room_id: Some(room_a),
            ..mark(student_id, AttendanceStatus::Present, "2025-04-15")
        },
    )
    .await
    .unwrap();
    AttendanceRepo::insert_holiday(&pool, d("2025-04-15"), Some(room_b))
        .await
        .unwrap();

    FloorRepo::resize_rooms(&pool, floor_id, 1).await.unwrap();

    let april = YearMonth::new(2025, 4).unwrap();
    for room_id in [None, Some(room_a)] {
        let rows =
            AttendanceRepo::list_between(&pool, april.first_day(), april.last_day(), room_id)
                .await
                .unwrap();
        let view = aggregate_month(&rows, april);
        assert_eq!(view.get(&d("2025-04-15")), Some(&AttendanceStatus::Present));
    }

    let rows = AttendanceRepo::list_for_day(&pool, d("2025-04-15"), None)
        .await
        .unwrap();
    assert!(!resolve_day(&rows, d("2025-04-15")).holiday);

    let markers: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE student_id IS NULL")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(markers, 0);
}
