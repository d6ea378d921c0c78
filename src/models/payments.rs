use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `payments` table. One row per transaction attempt.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub payment_id: Uuid,
    pub booking_id: i32,
    pub user_id: i32,
    pub payment_method: Option<String>,
    pub transaction_id: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub status: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bookings::Entity",
        from = "Column::BookingId",
        to = "super::bookings::Column::BookingId"
    )]
    Booking,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId"
    )]
    User,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub booking_id: i32,
    pub user_id: i32,
    pub payment_method: Option<String>,
    pub transaction_id: String,
    pub amount: f64,
    pub status: Option<String>,
}

impl CreatePayment {
    pub fn validate(&self) -> Result<(), String> {
        if self.transaction_id.trim().is_empty() {
            return Err("transaction_id cannot be empty".to_string());
        }
        validate_amount(self.amount)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePayment {
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
}

impl UpdatePayment {
    pub fn validate(&self) -> Result<(), String> {
        if self.payment_method.is_none()
            && self.transaction_id.is_none()
            && self.amount.is_none()
            && self.status.is_none()
        {
            return Err("No fields provided for update".to_string());
        }
        if let Some(transaction_id) = &self.transaction_id {
            if transaction_id.trim().is_empty() {
                return Err("transaction_id cannot be empty".to_string());
            }
        }
        match self.amount {
            Some(amount) => validate_amount(amount),
            None => Ok(()),
        }
    }
}

fn validate_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err("amount must be a non-negative number".to_string());
    }
    Ok(())
}
