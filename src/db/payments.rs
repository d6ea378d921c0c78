use sea_orm::*;
use uuid::Uuid;

use crate::models::payments::{self, CreatePayment, UpdatePayment};

/// Insert a payment under a freshly generated id.
pub async fn insert_payment(
    db: &DatabaseConnection,
    input: CreatePayment,
) -> Result<payments::Model, DbErr> {
    let new_payment = payments::ActiveModel {
        payment_id: Set(Uuid::new_v4()),
        booking_id: Set(input.booking_id),
        user_id: Set(input.user_id),
        payment_method: Set(input.payment_method),
        transaction_id: Set(input.transaction_id),
        amount: Set(input.amount),
        status: Set(input.status),
        created_at: Set(chrono::Utc::now()),
    };

    new_payment.insert(db).await
}

/// Fetch all payments, newest first.
pub async fn get_all_payments(db: &DatabaseConnection) -> Result<Vec<payments::Model>, DbErr> {
    payments::Entity::find()
        .order_by_desc(payments::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_payment_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<payments::Model>, DbErr> {
    payments::Entity::find_by_id(id).one(db).await
}

/// Patch the supplied fields of a payment.
pub async fn update_payment(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePayment,
) -> Result<payments::Model, DbErr> {
    let payment = payments::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("Payment {id} not found")))?;

    let mut active: payments::ActiveModel = payment.into();

    if let Some(method) = input.payment_method {
        active.payment_method = Set(Some(method));
    }
    if let Some(transaction_id) = input.transaction_id {
        active.transaction_id = Set(transaction_id);
    }
    if let Some(amount) = input.amount {
        active.amount = Set(amount);
    }
    if let Some(status) = input.status {
        active.status = Set(Some(status));
    }

    active.update(db).await
}

pub async fn delete_payment(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    payments::Entity::delete_by_id(id).exec(db).await
}
