use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validate_rating;

/// SeaORM entity for the `service_reviews` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_review_id: Uuid,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub service_id: i32,
    pub user_id: i32,
    pub professional_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::ServiceId"
    )]
    Service,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceReview {
    pub rating: i32,
    pub comment: Option<String>,
    pub service_id: i32,
    pub user_id: i32,
    pub professional_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceReview {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl UpdateServiceReview {
    pub fn validate(&self) -> Result<(), String> {
        match (self.rating, &self.comment) {
            (None, None) => Err("No fields provided for update".to_string()),
            (Some(rating), _) => validate_rating(rating),
            _ => Ok(()),
        }
    }
}
