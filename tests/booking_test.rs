//! Booking lifecycle tests: request dispatch, new-booking defaults, and the
//! accept / decline / cancel store operations against a mock connection.
//!
//! Run with: `cargo test --test booking_test`
use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, QueryTrait};

use qwicky_backend::db::bookings::{
    AssignmentOutcome, accept_booking, cancel_booking, pending_for_professional_query,
    reject_booking,
};
use qwicky_backend::models::bookings::{
    self, BookingCommand, BookingFields, BookingStatus, CreateBooking, UpdateBooking,
    generate_booking_pin,
};

/// Helper: a stored booking with the given assignee and status.
fn booking(id: i32, professional_id: Option<i32>, status: BookingStatus) -> bookings::Model {
    bookings::Model {
        booking_id: id,
        service_id: 3,
        user_id: 11,
        professional_id,
        scheduled_date: None,
        scheduled_time: None,
        booking_type: Some("home".to_string()),
        status,
        payment_status: "pending".to_string(),
        total_amount: Some(499.0),
        address_line: None,
        city: Some("Pune".to_string()),
        state: None,
        country: None,
        postal_code: None,
        latitude: None,
        longitude: None,
        booking_pin: "0042".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
    }
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

fn parse_update(body: serde_json::Value) -> UpdateBooking {
    serde_json::from_value(body).expect("body should deserialize")
}

// ── PIN ──

#[test]
fn test_booking_pin_is_four_digits() {
    for _ in 0..200 {
        let pin = generate_booking_pin();
        assert_eq!(pin.len(), 4, "pin {pin} should be zero padded");
        assert!(pin.chars().all(|c| c.is_ascii_digit()));
    }
}

// ── Create ──

#[test]
fn test_new_booking_defaults_to_pending() {
    let input: CreateBooking = serde_json::from_value(serde_json::json!({
        "service_id": 3,
        "user_id": 11,
        "scheduled_date": "2025-03-04",
        "scheduled_time": "14:30:00",
        "total_amount": 499.0
    }))
    .unwrap();

    let now = Utc::now();
    let active = input.into_active_model("0007".to_string(), now).unwrap();

    assert_eq!(active.status.clone().unwrap(), BookingStatus::Pending);
    assert_eq!(active.payment_status.clone().unwrap(), "pending");
    assert_eq!(active.professional_id.clone().unwrap(), None);
    assert_eq!(active.booking_pin.clone().unwrap(), "0007");
    assert_eq!(active.created_at.clone().unwrap(), now);
}

#[test]
fn test_new_booking_keeps_supplied_payment_status_and_professional() {
    let input = CreateBooking {
        service_id: Some(3),
        user_id: Some(11),
        professional_id: Some(8),
        payment_status: Some("paid".to_string()),
        ..Default::default()
    };

    let active = input.into_active_model("1234".to_string(), Utc::now()).unwrap();

    assert_eq!(active.payment_status.clone().unwrap(), "paid");
    assert_eq!(active.professional_id.clone().unwrap(), Some(8));
    assert_eq!(active.status.clone().unwrap(), BookingStatus::Pending);
}

#[test]
fn test_new_booking_requires_service_and_user() {
    let input = CreateBooking {
        service_id: Some(3),
        ..Default::default()
    };
    assert!(input.into_active_model("1234".to_string(), Utc::now()).is_err());
}

#[test]
fn test_new_booking_rejects_negative_amount() {
    let input = CreateBooking {
        service_id: Some(3),
        user_id: Some(11),
        total_amount: Some(-1.0),
        ..Default::default()
    };
    assert!(input.into_active_model("1234".to_string(), Utc::now()).is_err());
}

// ── PUT dispatch ──

#[test]
fn test_accept_requires_professional_id() {
    let err = parse_update(serde_json::json!({ "status": "accepted" }))
        .into_command()
        .unwrap_err();
    assert!(err.contains("professional_id"));
}

#[test]
fn test_accept_and_reject_commands() {
    let accept = parse_update(serde_json::json!({ "status": "accepted", "professional_id": 5 }));
    assert_eq!(
        accept.into_command().unwrap(),
        BookingCommand::Accept { professional_id: 5 }
    );

    let reject = parse_update(serde_json::json!({ "status": "rejected", "professional_id": 5 }));
    assert_eq!(
        reject.into_command().unwrap(),
        BookingCommand::Reject { professional_id: 5 }
    );
}

#[test]
fn test_cancel_command() {
    let cancel = parse_update(serde_json::json!({ "status": "cancelled" }));
    assert_eq!(cancel.into_command().unwrap(), BookingCommand::Cancel);
}

#[test]
fn test_unknown_status_is_rejected_by_deserialization() {
    let result: Result<UpdateBooking, _> =
        serde_json::from_value(serde_json::json!({ "status": "done" }));
    assert!(result.is_err());
}

#[test]
fn test_professional_id_without_status_is_refused() {
    let body = parse_update(serde_json::json!({ "professional_id": 5, "city": "Pune" }));
    assert!(body.into_command().is_err());
}

#[test]
fn test_field_patch_and_empty_patch() {
    let patch = parse_update(serde_json::json!({ "city": "Mumbai", "total_amount": 650.5 }));
    match patch.into_command().unwrap() {
        BookingCommand::Patch(fields) => {
            assert_eq!(fields.city.as_deref(), Some("Mumbai"));
            assert_eq!(fields.total_amount, Some(650.5));
            assert!(fields.user_id.is_none());
        }
        other => panic!("expected a patch, got {other:?}"),
    }

    let empty = parse_update(serde_json::json!({}));
    assert!(empty.into_command().is_err());
}

#[test]
fn test_booking_fields_apply_only_supplied_columns() {
    let stored = booking(1, None, BookingStatus::Pending);
    let mut active: bookings::ActiveModel = stored.into();

    BookingFields {
        city: Some("Nashik".to_string()),
        latitude: Some(19.99),
        ..Default::default()
    }
    .apply(&mut active);

    assert!(active.city.is_set());
    assert!(active.latitude.is_set());
    assert!(!active.total_amount.is_set());
    assert!(!active.status.is_set());
}

// ── Pending feed ──

#[test]
fn test_pending_query_excludes_declined_bookings() {
    let sql = pending_for_professional_query(7)
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.contains("booking_rejections"), "{sql}");
    assert!(sql.contains("NOT IN"), "{sql}");
    assert!(sql.contains("IS NULL"), "{sql}");
    assert!(sql.contains("'pending'"), "{sql}");
    assert!(sql.contains("'accepted'"), "{sql}");
}

#[test]
fn test_pending_query_groups_each_branch() {
    let sql = pending_for_professional_query(7)
        .build(DatabaseBackend::Postgres)
        .to_string();

    let branches: Vec<&str> = sql.split(") OR (").collect();
    assert_eq!(branches.len(), 2, "expected two parenthesised branches: {sql}");
    let (open, mine) = (branches[0], branches[1]);

    // Unclaimed branch: pending, unassigned, not declined by this professional.
    assert!(open.contains(r#""bookings"."status" = 'pending'"#), "{open}");
    assert!(open.contains(r#""bookings"."professional_id" IS NULL"#), "{open}");
    assert!(open.contains(r#""bookings"."booking_id" NOT IN (SELECT"#), "{open}");
    assert!(!open.contains("'accepted'"), "{open}");

    // Own branch: accepted and held by this professional.
    assert!(mine.contains(r#""bookings"."status" = 'accepted'"#), "{mine}");
    assert!(mine.contains(r#""bookings"."professional_id" = 7"#), "{mine}");
    assert!(!mine.contains("'pending'"), "{mine}");
    assert!(!mine.contains("IS NULL"), "{mine}");
}

// ── Accept / reject / cancel against a mock store ──

fn mock_db(exec_results: Vec<MockExecResult>, rows: Vec<Vec<bookings::Model>>) -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(exec_results)
        .append_query_results(rows)
        .into_connection()
}

#[actix_web::test]
async fn test_accept_unassigned_booking() {
    let db = mock_db(
        vec![exec(1)],
        vec![vec![booking(1, Some(5), BookingStatus::Accepted)]],
    );

    let outcome = accept_booking(&db, 1, 5).await.unwrap();
    match outcome {
        AssignmentOutcome::Updated(b) => {
            assert_eq!(b.professional_id, Some(5));
            assert_eq!(b.status, BookingStatus::Accepted);
        }
        other => panic!("expected Updated, got {other:?}"),
    }
}

#[actix_web::test]
async fn test_accept_refused_when_held_by_another_professional() {
    let db = mock_db(
        vec![exec(0)],
        vec![vec![booking(1, Some(9), BookingStatus::Accepted)]],
    );

    let outcome = accept_booking(&db, 1, 5).await.unwrap();
    assert_eq!(outcome, AssignmentOutcome::HeldBy(9));
}

#[actix_web::test]
async fn test_accept_missing_booking() {
    let db = mock_db(vec![exec(0)], vec![vec![]]);

    let outcome = accept_booking(&db, 404, 5).await.unwrap();
    assert_eq!(outcome, AssignmentOutcome::NotFound);
}

#[actix_web::test]
async fn test_reject_by_current_holder_is_refused() {
    let db = mock_db(vec![], vec![vec![booking(1, Some(7), BookingStatus::Accepted)]]);

    let outcome = reject_booking(&db, 1, 7).await.unwrap();
    assert_eq!(outcome, AssignmentOutcome::HeldBy(7));
}

#[actix_web::test]
async fn test_reject_leaves_booking_pending() {
    let db = mock_db(vec![exec(1)], vec![vec![booking(1, None, BookingStatus::Pending)]]);

    match reject_booking(&db, 1, 7).await.unwrap() {
        AssignmentOutcome::Updated(b) => {
            assert_eq!(b.status, BookingStatus::Pending);
            assert_eq!(b.professional_id, None);
        }
        other => panic!("expected Updated, got {other:?}"),
    }
}

#[actix_web::test]
async fn test_cancel_reports_missing_booking() {
    let db = mock_db(vec![exec(1), exec(0)], vec![]);

    assert!(cancel_booking(&db, 1).await.unwrap());
    assert!(!cancel_booking(&db, 1).await.unwrap());
}
