use sea_orm::prelude::Expr;
use sea_orm::*;

use crate::models::services::{self, NewService, UpdateService};

fn active() -> Select<services::Entity> {
    services::Entity::find().filter(services::Column::IsActive.eq(true))
}

/// Insert a new (active) service.
pub async fn insert_service(
    db: &DatabaseConnection,
    input: NewService,
) -> Result<services::Model, DbErr> {
    let new_service = services::ActiveModel {
        service_title: Set(input.service_title),
        description: Set(input.description),
        main_description: Set(input.main_description),
        service_type: Set(input.service_type),
        service_price: Set(input.service_price),
        service_duration: Set(input.service_duration),
        category_id: Set(input.category_id),
        service_image: Set(input.service_image),
        location: Set(input.location),
        is_active: Set(true),
        ..Default::default()
    };

    new_service.insert(db).await
}

/// Fetch all active services.
pub async fn get_all_services(db: &DatabaseConnection) -> Result<Vec<services::Model>, DbErr> {
    active().order_by_asc(services::Column::ServiceId).all(db).await
}

/// Fetch a single active service by ID.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<services::Model>, DbErr> {
    active().filter(services::Column::ServiceId.eq(id)).one(db).await
}

/// Patch the supplied fields of an active service.
pub async fn update_service(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateService,
) -> Result<services::Model, DbErr> {
    let service = get_service_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("Service {id} not found")))?;

    let mut active: services::ActiveModel = service.into();

    if let Some(title) = input.service_title {
        active.service_title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(main_description) = input.main_description {
        active.main_description = Set(Some(main_description));
    }
    if let Some(service_type) = input.service_type {
        active.service_type = Set(service_type);
    }
    if let Some(price) = input.service_price {
        active.service_price = Set(price);
    }
    if let Some(duration) = input.service_duration {
        active.service_duration = Set(duration);
    }
    if let Some(category_id) = input.category_id {
        active.category_id = Set(category_id);
    }
    if let Some(image) = input.service_image {
        active.service_image = Set(image);
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }

    active.update(db).await
}

/// Soft delete: flag an active service as inactive.
pub async fn deactivate_service(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = services::Entity::update_many()
        .col_expr(services::Column::IsActive, Expr::value(false))
        .filter(services::Column::ServiceId.eq(id))
        .filter(services::Column::IsActive.eq(true))
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}
