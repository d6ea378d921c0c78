//! Professional patches: multipart text fields, credential uploads, and the
//! earnings increment.
//!
//! Run with: `cargo test --test professional_test`
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use qwicky_backend::models::professionals::{
    ProfessionalStatus, UpdateProfessional, credential_data_uri,
};

#[test]
fn test_credential_data_uri() {
    let uri = credential_data_uri(Some("image/png"), b"\x89PNG");
    assert_eq!(uri, format!("data:image/png;base64,{}", STANDARD.encode(b"\x89PNG")));
}

#[test]
fn test_credential_data_uri_defaults_mime() {
    let uri = credential_data_uri(None, b"abc");
    assert_eq!(uri, "data:application/octet-stream;base64,YWJj");
}

#[test]
fn test_form_fields_fill_the_patch() {
    let mut patch = UpdateProfessional::default();
    patch.apply_form_field("user_id", "12").unwrap();
    patch.apply_form_field("status", "Accepted").unwrap();
    patch.apply_form_field("money_earned", " 250.5 ").unwrap();
    patch.apply_form_field("unrelated", "ignored").unwrap();

    assert_eq!(patch.user_id, Some(12));
    assert_eq!(patch.status, Some(ProfessionalStatus::Accepted));
    assert_eq!(patch.money_earned, Some(250.5));
    assert!(patch.service_id.is_none());
}

#[test]
fn test_empty_form_field_is_absent() {
    let mut patch = UpdateProfessional::default();
    patch.apply_form_field("service_id", "").unwrap();
    assert!(patch.is_empty());
    assert!(patch.validate().is_err());
}

#[test]
fn test_bad_form_values() {
    let mut patch = UpdateProfessional::default();
    assert!(patch.apply_form_field("service_id", "two").is_err());
    assert!(patch.apply_form_field("status", "retired").is_err());
}

#[test]
fn test_json_patch_validation() {
    let patch: UpdateProfessional =
        serde_json::from_value(serde_json::json!({ "money_earned": 100.0 })).unwrap();
    assert!(patch.validate().is_ok());

    let status: UpdateProfessional =
        serde_json::from_value(serde_json::json!({ "status": "rejected" })).unwrap();
    assert_eq!(status.status, Some(ProfessionalStatus::Rejected));
}
