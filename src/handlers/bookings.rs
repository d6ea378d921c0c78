use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::bookings::{self as booking_db, AssignmentOutcome};
use crate::db::professionals as professional_db;
use crate::error::ApiError;
use crate::models::bookings::{BookingCommand, CreateBooking, UpdateBooking, generate_booking_pin};

/// GET /api/bookings — list all active (non-cancelled) bookings.
pub async fn get_bookings(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let bookings = booking_db::get_all_bookings(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// GET /api/bookings/{id} — get a single active booking.
pub async fn get_booking(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match booking_db::get_booking_by_id(db.get_ref(), id).await? {
        Some(booking) => Ok(HttpResponse::Ok().json(booking)),
        None => Err(ApiError::not_found(format!("Booking {id} not found"))),
    }
}

/// GET /api/bookings/user/{user_id} — a user's active bookings with service title and image.
pub async fn get_bookings_by_user(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let bookings = booking_db::get_bookings_by_user(db.get_ref(), user_id).await?;
    if bookings.is_empty() {
        return Err(ApiError::not_found("No bookings found for this user"));
    }
    Ok(HttpResponse::Ok().json(bookings))
}

/// GET /api/bookings/pending/{professional_id} — open work for a professional.
///
/// Unclaimed pending bookings the professional has not declined, plus the
/// bookings they have already accepted.
pub async fn get_pending_for_professional(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let professional_id = path.into_inner();
    let bookings = booking_db::get_pending_for_professional(db.get_ref(), professional_id).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// POST /api/bookings — create a booking. Responds with the new `booking_id`.
pub async fn create_booking(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    let new_booking = body
        .into_inner()
        .into_active_model(generate_booking_pin(), chrono::Utc::now())
        .map_err(ApiError::Validation)?;

    let booking = booking_db::insert_booking(db.get_ref(), new_booking).await?;
    tracing::info!(booking_id = booking.booking_id, "booking created");

    Ok(HttpResponse::Created().json(serde_json::json!({ "booking_id": booking.booking_id })))
}

/// PUT /api/bookings/{id} — accept, reject, cancel or patch a booking.
///
/// `status: "accepted"` / `"rejected"` require `professional_id`;
/// `status: "cancelled"` soft deletes; without a status the supplied fields are patched.
pub async fn update_booking(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateBooking>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let command = body.into_inner().into_command().map_err(ApiError::Validation)?;

    match command {
        BookingCommand::Accept { professional_id } => {
            accept(db.get_ref(), id, professional_id).await
        }
        BookingCommand::Reject { professional_id } => {
            reject(db.get_ref(), id, professional_id).await
        }
        BookingCommand::Cancel => cancel(db.get_ref(), id).await,
        BookingCommand::Patch(fields) => {
            let updated = booking_db::update_booking(db.get_ref(), id, fields).await?;
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "Booking updated successfully",
                "booking": updated,
            })))
        }
    }
}

/// DELETE /api/bookings/{id} — soft delete (cancel) a booking.
pub async fn delete_booking(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    cancel(db.get_ref(), path.into_inner()).await
}

async fn accept(
    db: &DatabaseConnection,
    id: i32,
    professional_id: i32,
) -> Result<HttpResponse, ApiError> {
    if professional_db::get_professional_by_id(db, professional_id)
        .await?
        .is_none()
    {
        return Err(ApiError::validation(format!(
            "Invalid professional_id: professional {professional_id} does not exist"
        )));
    }

    match booking_db::accept_booking(db, id, professional_id).await? {
        AssignmentOutcome::Updated(booking) => {
            tracing::info!(booking_id = id, professional_id, "booking accepted");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "Booking accepted successfully",
                "booking": booking,
            })))
        }
        AssignmentOutcome::NotFound => Err(ApiError::not_found(format!("Booking {id} not found"))),
        AssignmentOutcome::HeldBy(holder) => {
            tracing::warn!(booking_id = id, professional_id, holder, "accept refused");
            Err(ApiError::Conflict(
                "Booking has already been accepted by another professional".to_string(),
            ))
        }
    }
}

async fn reject(
    db: &DatabaseConnection,
    id: i32,
    professional_id: i32,
) -> Result<HttpResponse, ApiError> {
    match booking_db::reject_booking(db, id, professional_id).await? {
        AssignmentOutcome::Updated(_) => {
            tracing::info!(booking_id = id, professional_id, "booking declined");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "Booking rejected successfully",
            })))
        }
        AssignmentOutcome::NotFound => Err(ApiError::not_found(format!("Booking {id} not found"))),
        AssignmentOutcome::HeldBy(_) => Err(ApiError::Conflict(
            "You have already accepted this booking; cancel it instead".to_string(),
        )),
    }
}

async fn cancel(db: &DatabaseConnection, id: i32) -> Result<HttpResponse, ApiError> {
    if !booking_db::cancel_booking(db, id).await? {
        return Err(ApiError::not_found(format!("Booking {id} not found")));
    }
    tracing::info!(booking_id = id, "booking cancelled");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Booking deleted successfully",
    })))
}
