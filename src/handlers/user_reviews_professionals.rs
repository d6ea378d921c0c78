use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::user_reviews_professionals as review_db;
use crate::error::ApiError;
use crate::models::user_reviews_professionals::{
    CreateProfessionalReview, UpdateProfessionalReview,
};
use crate::models::validate_rating;

/// GET /api/user-review-prof
pub async fn get_reviews(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let reviews = review_db::get_all_reviews(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /api/user-review-prof/{id}
pub async fn get_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    match review_db::get_review_by_id(db.get_ref(), path.into_inner()).await? {
        Some(review) => Ok(HttpResponse::Ok().json(review)),
        None => Err(ApiError::not_found("Review not found")),
    }
}

/// GET /api/user-review-prof/professional/{professional_id}
///
/// Responds with `{ average_rating, total_reviews, reviews }`; each review
/// carries the reviewer's display name.
pub async fn get_professional_ratings(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let ratings = review_db::get_ratings_for_professional(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ratings))
}

/// POST /api/user-review-prof
pub async fn create_review(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProfessionalReview>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    validate_rating(input.rating).map_err(ApiError::Validation)?;

    let review = review_db::insert_review(db.get_ref(), input).await?;
    tracing::info!(
        review_id = %review.review_id,
        professional_id = review.professional_id,
        "professional review created"
    );
    Ok(HttpResponse::Created().json(review))
}

/// PUT /api/user-review-prof/{id}
pub async fn update_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProfessionalReview>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate().map_err(ApiError::Validation)?;

    let updated = review_db::update_review(db.get_ref(), path.into_inner(), input).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/user-review-prof/{id}
pub async fn delete_review(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let result = review_db::delete_review(db.get_ref(), path.into_inner()).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Review not found"));
    }
    Ok(HttpResponse::NoContent().finish())
}
