//! SQL the data-access layer sends: soft-delete filters on every list and
//! lookup, the additive earnings update, and the login stamp on phone checks.
//!
//! Statements are captured from a mock connection's transaction log and
//! rendered with their values inlined.
//!
//! Run with: `cargo test --test store_test`
use chrono::Utc;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, QueryTrait,
};

use qwicky_backend::db::{bookings as booking_db, professionals as professional_db};
use qwicky_backend::db::{services as service_db, users as user_db};
use qwicky_backend::models::professionals::{self, ProfessionalStatus, UpdateProfessional};
use qwicky_backend::models::users::{self, AccountStatus};
use qwicky_backend::models::{bookings, services};

fn user(id: i32) -> users::Model {
    users::Model {
        user_id: id,
        first_name: "Asha".to_string(),
        last_name: "Patil".to_string(),
        email: "asha@example.com".to_string(),
        phone_number: "9876543210".to_string(),
        password: "$argon2id$stored".to_string(),
        profile_image_url: None,
        gender: None,
        date_of_birth: None,
        address_line: None,
        city: None,
        state: None,
        country: None,
        postal_code: None,
        is_email_verified: false,
        is_phone_number_verified: true,
        created_at: Utc::now(),
        last_login_at: None,
        account_status: AccountStatus::Active,
        preferred_language: "en".to_string(),
        is_premium_user: false,
        referral_code: None,
        referred_by: None,
        service_items_id: serde_json::json!([]),
    }
}

fn professional(id: i32, money_earned: f64) -> professionals::Model {
    professionals::Model {
        professional_id: id,
        user_id: 2,
        service_id: 3,
        status: ProfessionalStatus::Accepted,
        money_earned,
        credential_image: None,
        created_at: Utc::now(),
    }
}

/// Helper: every statement the connection saw, values inlined.
fn logged_sql(db: DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.to_string()))
        .collect()
}

// ── Soft delete ──

#[actix_web::test]
async fn test_user_reads_skip_deactivated_accounts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new(), Vec::new(), Vec::new()])
        .into_connection();

    user_db::get_all_users(&db).await.unwrap();
    assert!(user_db::get_user_by_id(&db, 1).await.unwrap().is_none());
    assert!(user_db::get_user_by_phone(&db, "9876543210").await.unwrap().is_none());

    let sql = logged_sql(db);
    assert_eq!(sql.len(), 3);
    for stmt in &sql {
        assert!(
            stmt.contains(r#""users"."account_status" = 'active'"#),
            "missing active filter: {stmt}"
        );
    }
}

#[actix_web::test]
async fn test_service_reads_skip_inactive_services() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<services::Model>::new(), Vec::new()])
        .into_connection();

    service_db::get_all_services(&db).await.unwrap();
    assert!(service_db::get_service_by_id(&db, 1).await.unwrap().is_none());

    for stmt in logged_sql(db) {
        assert!(
            stmt.contains(r#""services"."is_active" = TRUE"#),
            "missing active filter: {stmt}"
        );
    }
}

#[actix_web::test]
async fn test_booking_reads_skip_cancelled_bookings() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<bookings::Model>::new(), Vec::new(), Vec::new()])
        .into_connection();

    booking_db::get_all_bookings(&db).await.unwrap();
    assert!(booking_db::get_booking_by_id(&db, 1).await.unwrap().is_none());
    assert!(booking_db::get_bookings_by_user(&db, 11).await.unwrap().is_empty());

    let sql = logged_sql(db);
    assert_eq!(sql.len(), 3);
    for stmt in &sql {
        assert!(
            stmt.contains(r#""bookings"."status" <> 'cancelled'"#),
            "missing cancelled filter: {stmt}"
        );
    }
}

#[actix_web::test]
async fn test_soft_deletes_only_touch_live_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult { last_insert_id: 0, rows_affected: 1 },
            MockExecResult { last_insert_id: 0, rows_affected: 1 },
            MockExecResult { last_insert_id: 0, rows_affected: 1 },
        ])
        .into_connection();

    assert!(user_db::deactivate_user(&db, 1).await.unwrap());
    assert!(service_db::deactivate_service(&db, 2).await.unwrap());
    assert!(booking_db::cancel_booking(&db, 3).await.unwrap());

    let sql = logged_sql(db);
    assert!(sql[0].contains(r#"SET "account_status" = 'inactive'"#), "{}", sql[0]);
    assert!(sql[1].contains(r#"SET "is_active" = FALSE"#), "{}", sql[1]);
    assert!(sql[2].contains(r#"SET "status" = 'cancelled'"#), "{}", sql[2]);
    assert!(sql[2].contains(r#""bookings"."status" <> 'cancelled'"#), "{}", sql[2]);
}

// ── Earnings ──

#[test]
fn test_money_earned_is_incremented_in_sql() {
    let patch = UpdateProfessional {
        money_earned: Some(250.5),
        ..Default::default()
    };
    let sql = professional_db::professional_update_query(4, patch)
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(
        sql.contains(r#"SET "money_earned" = "money_earned" + 250.5"#),
        "{sql}"
    );
    assert!(sql.contains(r#""professionals"."professional_id" = 4"#), "{sql}");
    assert!(!sql.contains(r#""user_id" ="#), "only supplied columns: {sql}");
    assert!(!sql.contains(r#""credential_image""#), "only supplied columns: {sql}");
}

#[actix_web::test]
async fn test_update_professional_sends_one_update_then_rereads() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
        .append_query_results([vec![professional(4, 750.5)]])
        .into_connection();

    let patch = UpdateProfessional {
        money_earned: Some(250.5),
        status: Some(ProfessionalStatus::Accepted),
        ..Default::default()
    };
    let updated = professional_db::update_professional(&db, 4, patch).await.unwrap();
    assert_eq!(updated.money_earned, 750.5);

    let sql = logged_sql(db);
    assert_eq!(sql.len(), 2);
    assert!(sql[0].starts_with(r#"UPDATE "professionals""#), "{}", sql[0]);
    assert!(sql[0].contains(r#""money_earned" = "money_earned" + 250.5"#), "{}", sql[0]);
    assert!(sql[0].contains(r#""status" = 'accepted'"#), "{}", sql[0]);
    assert!(sql[1].starts_with("SELECT"), "{}", sql[1]);
}

#[actix_web::test]
async fn test_update_missing_professional_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 0 }])
        .into_connection();

    let patch = UpdateProfessional {
        money_earned: Some(10.0),
        ..Default::default()
    };
    let err = professional_db::update_professional(&db, 99, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, sea_orm::DbErr::RecordNotFound(_)));
}

// ── Phone check ──

#[actix_web::test]
async fn test_phone_check_stamps_last_login() {
    let mut stamped = user(4);
    stamped.last_login_at = Some(Utc::now());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user(4)], vec![stamped]])
        .into_connection();

    let found = user_db::touch_user_by_phone(&db, "9876543210")
        .await
        .unwrap()
        .expect("user should be found");
    assert!(found.last_login_at.is_some());

    let sql = logged_sql(db);
    assert_eq!(sql.len(), 2);
    assert!(sql[0].contains(r#""users"."phone_number" = '9876543210'"#), "{}", sql[0]);
    assert!(sql[1].starts_with(r#"UPDATE "users" SET "last_login_at" = "#), "{}", sql[1]);
    assert!(sql[1].contains(r#""users"."user_id" = 4"#), "{}", sql[1]);
}

#[actix_web::test]
async fn test_phone_check_miss_writes_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();

    assert!(user_db::touch_user_by_phone(&db, "0000000000").await.unwrap().is_none());

    let sql = logged_sql(db);
    assert_eq!(sql.len(), 1);
    assert!(sql[0].starts_with("SELECT"), "{}", sql[0]);
}
