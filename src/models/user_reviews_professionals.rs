use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validate_rating;

/// SeaORM entity for the `user_reviews_professionals` table: a user's rating of
/// the professional who served one of their bookings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_reviews_professionals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub review_id: Uuid,
    pub booking_id: i32,
    pub user_id: i32,
    pub professional_id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_text: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfessionalReview {
    pub booking_id: i32,
    pub user_id: i32,
    pub professional_id: i32,
    pub rating: i32,
    pub review_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfessionalReview {
    pub rating: Option<i32>,
    pub review_text: Option<String>,
}

impl UpdateProfessionalReview {
    pub fn validate(&self) -> Result<(), String> {
        match (self.rating, &self.review_text) {
            (None, None) => Err("No fields provided for update".to_string()),
            (Some(rating), _) => validate_rating(rating),
            _ => Ok(()),
        }
    }
}

/// A review together with the reviewer's display name.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithAuthor {
    #[serde(flatten)]
    pub review: Model,
    pub username: String,
}

/// All reviews for one professional plus their aggregate rating.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalRatings {
    pub average_rating: f64,
    pub total_reviews: usize,
    pub reviews: Vec<ReviewWithAuthor>,
}

impl ProfessionalRatings {
    pub fn new(reviews: Vec<ReviewWithAuthor>) -> Self {
        let ratings: Vec<i32> = reviews.iter().map(|r| r.review.rating).collect();
        Self {
            average_rating: average_rating(&ratings),
            total_reviews: reviews.len(),
            reviews,
        }
    }
}

/// Mean rating rounded to one decimal place; zero when there are no ratings.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Reviewer name: first name, else last name, else the numeric user id.
pub fn display_name(user: Option<&super::users::Model>, user_id: i32) -> String {
    user.and_then(|u| {
        [&u.first_name, &u.last_name]
            .into_iter()
            .find(|name| !name.trim().is_empty())
            .cloned()
    })
    .unwrap_or_else(|| user_id.to_string())
}
