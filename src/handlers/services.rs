use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::bookings as booking_db;
use crate::db::services as service_db;
use crate::error::ApiError;
use crate::models::services::{CreateService, UpdateService};

/// GET /api/services — list all active services.
pub async fn get_services(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let services = service_db::get_all_services(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(services))
}

/// GET /api/services/{id} — get a single active service.
pub async fn get_service(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match service_db::get_service_by_id(db.get_ref(), id).await? {
        Some(service) => Ok(HttpResponse::Ok().json(service)),
        None => Err(ApiError::not_found(format!("Service {id} not found"))),
    }
}

/// POST /api/services — create a service. Every catalog field is required.
pub async fn create_service(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateService>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().validate().map_err(ApiError::Validation)?;
    let service = service_db::insert_service(db.get_ref(), input).await?;
    tracing::info!(service_id = service.service_id, "service created");

    Ok(HttpResponse::Created().json(serde_json::json!({ "service_id": service.service_id })))
}

/// PUT /api/services/{id} — patch the supplied fields of an active service.
pub async fn update_service(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateService>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate().map_err(ApiError::Validation)?;

    let updated = service_db::update_service(db.get_ref(), id, input).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Service updated successfully",
        "service": updated,
    })))
}

/// DELETE /api/services/{id} — soft delete a service.
///
/// Refused while pending or accepted bookings still reference the service.
pub async fn delete_service(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let open = booking_db::count_open_bookings_for_service(db.get_ref(), id).await?;
    if open > 0 {
        tracing::warn!(service_id = id, open, "service delete refused");
        return Err(ApiError::validation(format!(
            "Cannot delete service because it is referenced by {open} open booking(s)"
        )));
    }

    if !service_db::deactivate_service(db.get_ref(), id).await? {
        return Err(ApiError::not_found(format!("Service {id} not found")));
    }
    tracing::info!(service_id = id, "service deactivated");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Service deleted successfully" })))
}
