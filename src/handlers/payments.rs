use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::payments as payment_db;
use crate::error::ApiError;
use crate::models::payments::{CreatePayment, UpdatePayment};

/// GET /api/payment
pub async fn get_payments(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let payments = payment_db::get_all_payments(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(payments))
}

/// GET /api/payment/{id}
pub async fn get_payment(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match payment_db::get_payment_by_id(db.get_ref(), id).await? {
        Some(payment) => Ok(HttpResponse::Ok().json(payment)),
        None => Err(ApiError::not_found("Payment not found")),
    }
}

/// POST /api/payment — record a payment against a booking.
pub async fn create_payment(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePayment>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate().map_err(ApiError::Validation)?;

    let payment = payment_db::insert_payment(db.get_ref(), input).await?;
    tracing::info!(
        payment_id = %payment.payment_id,
        booking_id = payment.booking_id,
        "payment recorded"
    );
    Ok(HttpResponse::Created().json(payment))
}

/// PUT /api/payment/{id}
pub async fn update_payment(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePayment>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate().map_err(ApiError::Validation)?;

    let updated = payment_db::update_payment(db.get_ref(), path.into_inner(), input).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/payment/{id}
pub async fn delete_payment(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let result = payment_db::delete_payment(db.get_ref(), path.into_inner()).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Payment not found"));
    }
    Ok(HttpResponse::NoContent().finish())
}
