//! Rating bounds and professional rating aggregation.
//!
//! Run with: `cargo test --test review_test`
use chrono::Utc;
use uuid::Uuid;

use qwicky_backend::models::user_reviews_professionals::{
    self as reviews, ProfessionalRatings, ReviewWithAuthor, UpdateProfessionalReview,
    average_rating, display_name,
};
use qwicky_backend::models::users::{self, AccountStatus};
use qwicky_backend::models::validate_rating;

fn user(first: &str, last: &str) -> users::Model {
    users::Model {
        user_id: 4,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: "r@example.com".to_string(),
        phone_number: "9000000000".to_string(),
        password: "hash".to_string(),
        profile_image_url: None,
        gender: None,
        date_of_birth: None,
        address_line: None,
        city: None,
        state: None,
        country: None,
        postal_code: None,
        is_email_verified: false,
        is_phone_number_verified: false,
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

fn review(rating: i32) -> ReviewWithAuthor {
    ReviewWithAuthor {
        review: reviews::Model {
            review_id: Uuid::new_v4(),
            booking_id: 1,
            user_id: 4,
            professional_id: 2,
            rating,
            review_text: None,
            created_at: Utc::now(),
        },
        username: "Asha".to_string(),
    }
}

#[test]
fn test_rating_bounds() {
    assert!(validate_rating(1).is_ok());
    assert!(validate_rating(5).is_ok());
    assert!(validate_rating(0).is_err());
    assert!(validate_rating(6).is_err());
}

#[test]
fn test_average_rating_rounds_to_one_decimal() {
    assert_eq!(average_rating(&[]), 0.0);
    assert_eq!(average_rating(&[5]), 5.0);
    assert_eq!(average_rating(&[4, 5, 5]), 4.7);
    assert_eq!(average_rating(&[1, 2]), 1.5);
}

#[test]
fn test_professional_ratings_summary() {
    let summary = ProfessionalRatings::new(vec![review(3), review(4)]);
    assert_eq!(summary.total_reviews, 2);
    assert_eq!(summary.average_rating, 3.5);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["reviews"][0]["username"], "Asha");
    assert_eq!(json["reviews"][0]["rating"], 3);
}

#[test]
fn test_empty_ratings_summary() {
    let summary = ProfessionalRatings::new(vec![]);
    assert_eq!(summary.total_reviews, 0);
    assert_eq!(summary.average_rating, 0.0);
}

#[test]
fn test_display_name_fallbacks() {
    assert_eq!(display_name(Some(&user("Asha", "Patil")), 4), "Asha");
    assert_eq!(display_name(Some(&user("", "Patil")), 4), "Patil");
    assert_eq!(display_name(Some(&user(" ", "")), 4), "4");
    assert_eq!(display_name(None, 17), "17");
}

#[test]
fn test_review_update_validation() {
    assert!(UpdateProfessionalReview::default().validate().is_err());

    let out_of_range = UpdateProfessionalReview {
        rating: Some(9),
        review_text: None,
    };
    assert!(out_of_range.validate().is_err());

    let text_only = UpdateProfessionalReview {
        rating: None,
        review_text: Some("Great work".to_string()),
    };
    assert!(text_only.validate().is_ok());
}
