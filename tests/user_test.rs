//! User registration input, partial updates, and password hashing.
//!
//! Run with: `cargo test --test user_test`
use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};

use qwicky_backend::auth::password::hash_password;
use qwicky_backend::models::users::{CreateUser, UpdateUser};

fn create_body(phone: &str) -> CreateUser {
    serde_json::from_value(serde_json::json!({
        "first_name": "Asha",
        "last_name": "Patil",
        "email": "asha@example.com",
        "phone_number": phone,
        "password": "s3cret",
        "city": "Pune"
    }))
    .unwrap()
}

#[test]
fn test_required_fields_are_extracted() {
    let new_user = create_body("9876543210").required().expect("all fields present");
    assert_eq!(new_user.first_name, "Asha");
    assert_eq!(new_user.phone_number, "9876543210");
    assert_eq!(new_user.password, "s3cret");
}

#[test]
fn test_blank_required_field_counts_as_missing() {
    assert!(create_body("   ").required().is_none());

    let mut body = create_body("9876543210");
    body.password = None;
    assert!(body.required().is_none());
}

#[test]
fn test_update_user_is_empty() {
    assert!(UpdateUser::default().is_empty());

    let patch: UpdateUser = serde_json::from_value(serde_json::json!({ "city": "Nagpur" })).unwrap();
    assert!(!patch.is_empty());

    // Explicit nulls are treated like absent fields.
    let nulls: UpdateUser =
        serde_json::from_value(serde_json::json!({ "city": null, "gender": null })).unwrap();
    assert!(nulls.is_empty());
}

/// Helper: check a plaintext against a stored PHC string.
fn matches(hash: &str, password: &str) -> bool {
    let parsed = PasswordHash::new(hash).expect("stored hash should be a PHC string");
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[test]
fn test_password_hash_roundtrip() {
    let hash = hash_password("hunter2").expect("hashing should succeed");

    assert!(hash.starts_with("$argon2id$"), "PHC string expected, got {hash}");
    assert_ne!(hash, "hunter2");
    assert!(matches(&hash, "hunter2"));
    assert!(!matches(&hash, "hunter3"));
}

#[test]
fn test_password_hashes_are_salted() {
    let a = hash_password("same").unwrap();
    let b = hash_password("same").unwrap();
    assert_ne!(a, b);
}
