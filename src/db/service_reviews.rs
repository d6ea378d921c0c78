use sea_orm::*;
use uuid::Uuid;

use crate::models::service_reviews::{self, CreateServiceReview, UpdateServiceReview};

pub async fn insert_service_review(
    db: &DatabaseConnection,
    input: CreateServiceReview,
) -> Result<service_reviews::Model, DbErr> {
    let review = service_reviews::ActiveModel {
        service_review_id: Set(Uuid::new_v4()),
        rating: Set(input.rating),
        comment: Set(input.comment),
        service_id: Set(input.service_id),
        user_id: Set(input.user_id),
        professional_id: Set(input.professional_id),
        created_at: Set(chrono::Utc::now()),
    };

    review.insert(db).await
}

pub async fn get_all_service_reviews(
    db: &DatabaseConnection,
) -> Result<Vec<service_reviews::Model>, DbErr> {
    service_reviews::Entity::find()
        .order_by_desc(service_reviews::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_service_review_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<service_reviews::Model>, DbErr> {
    service_reviews::Entity::find_by_id(id).one(db).await
}

/// Reviews left for one service, newest first.
pub async fn get_reviews_by_service(
    db: &DatabaseConnection,
    service_id: i32,
) -> Result<Vec<service_reviews::Model>, DbErr> {
    service_reviews::Entity::find()
        .filter(service_reviews::Column::ServiceId.eq(service_id))
        .order_by_desc(service_reviews::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn update_service_review(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateServiceReview,
) -> Result<service_reviews::Model, DbErr> {
    let review = service_reviews::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("Service review {id} not found")))?;

    let mut active: service_reviews::ActiveModel = review.into();

    if let Some(rating) = input.rating {
        active.rating = Set(rating);
    }
    if let Some(comment) = input.comment {
        active.comment = Set(Some(comment));
    }

    active.update(db).await
}

pub async fn delete_service_review(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<DeleteResult, DbErr> {
    service_reviews::Entity::delete_by_id(id).exec(db).await
}
