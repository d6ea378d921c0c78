use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::service_reviews as review_db;
use crate::error::ApiError;
use crate::models::service_reviews::{CreateServiceReview, UpdateServiceReview};
use crate::models::validate_rating;

/// GET /api/servicereview
pub async fn get_service_reviews(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let reviews = review_db::get_all_service_reviews(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /api/servicereview/{id}
pub async fn get_service_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    match review_db::get_service_review_by_id(db.get_ref(), path.into_inner()).await? {
        Some(review) => Ok(HttpResponse::Ok().json(review)),
        None => Err(ApiError::not_found("Service review not found")),
    }
}

/// GET /api/servicereview/service/{service_id}
pub async fn get_reviews_by_service(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let reviews = review_db::get_reviews_by_service(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// POST /api/servicereview
pub async fn create_service_review(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateServiceReview>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    validate_rating(input.rating).map_err(ApiError::Validation)?;

    let review = review_db::insert_service_review(db.get_ref(), input).await?;
    tracing::info!(
        service_review_id = %review.service_review_id,
        service_id = review.service_id,
        "service review created"
    );
    Ok(HttpResponse::Created().json(review))
}

/// PUT /api/servicereview/{id} — change the rating and/or comment.
pub async fn update_service_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateServiceReview>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate().map_err(ApiError::Validation)?;

    let updated = review_db::update_service_review(db.get_ref(), path.into_inner(), input).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/servicereview/{id}
pub async fn delete_service_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let result = review_db::delete_service_review(db.get_ref(), path.into_inner()).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Service review not found"));
    }
    Ok(HttpResponse::NoContent().finish())
}
