use sea_orm::*;
use uuid::Uuid;

use crate::models::user_reviews_professionals::{
    self as reviews, CreateProfessionalReview, ProfessionalRatings, ReviewWithAuthor,
    UpdateProfessionalReview, display_name,
};
use crate::models::users;

pub async fn insert_review(
    db: &DatabaseConnection,
    input: CreateProfessionalReview,
) -> Result<reviews::Model, DbErr> {
    let review = reviews::ActiveModel {
        review_id: Set(Uuid::new_v4()),
        booking_id: Set(input.booking_id),
        user_id: Set(input.user_id),
        professional_id: Set(input.professional_id),
        rating: Set(input.rating),
        review_text: Set(input.review_text),
        created_at: Set(chrono::Utc::now()),
    };

    review.insert(db).await
}

pub async fn get_all_reviews(db: &DatabaseConnection) -> Result<Vec<reviews::Model>, DbErr> {
    reviews::Entity::find()
        .order_by_desc(reviews::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_review_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<reviews::Model>, DbErr> {
    reviews::Entity::find_by_id(id).one(db).await
}

/// Every review of a professional with the reviewer's name, plus the average rating.
pub async fn get_ratings_for_professional(
    db: &DatabaseConnection,
    professional_id: i32,
) -> Result<ProfessionalRatings, DbErr> {
    let rows = reviews::Entity::find()
        .filter(reviews::Column::ProfessionalId.eq(professional_id))
        .order_by_desc(reviews::Column::CreatedAt)
        .find_also_related(users::Entity)
        .all(db)
        .await?;

    let reviews = rows
        .into_iter()
        .map(|(review, user)| ReviewWithAuthor {
            username: display_name(user.as_ref(), review.user_id),
            review,
        })
        .collect();

    Ok(ProfessionalRatings::new(reviews))
}

pub async fn update_review(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateProfessionalReview,
) -> Result<reviews::Model, DbErr> {
    let review = reviews::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("Review {id} not found")))?;

    let mut active: reviews::ActiveModel = review.into();

    if let Some(rating) = input.rating {
        active.rating = Set(rating);
    }
    if let Some(text) = input.review_text {
        active.review_text = Set(Some(text));
    }

    active.update(db).await
}

pub async fn delete_review(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    reviews::Entity::delete_by_id(id).exec(db).await
}
