use sea_orm::prelude::Expr;
use sea_orm::sea_query::ExprTrait;
use sea_orm::*;

use crate::models::professionals::{self, CreateProfessional, ProfessionalStatus, UpdateProfessional};

/// Insert a new professional (defaults to Pending status with nothing earned).
pub async fn insert_professional(
    db: &DatabaseConnection,
    input: CreateProfessional,
) -> Result<professionals::Model, DbErr> {
    let new_professional = professionals::ActiveModel {
        user_id: Set(input.user_id),
        service_id: Set(input.service_id),
        status: Set(input.status.unwrap_or(ProfessionalStatus::Pending)),
        money_earned: Set(0.0),
        credential_image: Set(None),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_professional.insert(db).await
}

/// Fetch all professionals.
pub async fn get_all_professionals(
    db: &DatabaseConnection,
) -> Result<Vec<professionals::Model>, DbErr> {
    professionals::Entity::find()
        .order_by_asc(professionals::Column::ProfessionalId)
        .all(db)
        .await
}

/// Fetch a single professional by ID.
pub async fn get_professional_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<professionals::Model>, DbErr> {
    professionals::Entity::find_by_id(id).one(db).await
}

/// The first professional registered for a service, if any.
pub async fn get_first_professional_for_service(
    db: &DatabaseConnection,
    service_id: i32,
) -> Result<Option<professionals::Model>, DbErr> {
    professionals::Entity::find()
        .filter(professionals::Column::ServiceId.eq(service_id))
        .order_by_asc(professionals::Column::ProfessionalId)
        .one(db)
        .await
}

/// The single UPDATE for a professional patch: only supplied fields are set and
/// `money_earned` is added to the stored value.
pub fn professional_update_query(
    id: i32,
    input: UpdateProfessional,
) -> UpdateMany<professionals::Entity> {
    let mut update = professionals::Entity::update_many()
        .filter(professionals::Column::ProfessionalId.eq(id));

    if let Some(user_id) = input.user_id {
        update = update.col_expr(professionals::Column::UserId, Expr::value(user_id));
    }
    if let Some(service_id) = input.service_id {
        update = update.col_expr(professionals::Column::ServiceId, Expr::value(service_id));
    }
    if let Some(status) = input.status {
        update = update.col_expr(professionals::Column::Status, Expr::value(status));
    }
    if let Some(delta) = input.money_earned {
        update = update.col_expr(
            professionals::Column::MoneyEarned,
            Expr::col(professionals::Column::MoneyEarned).add(delta),
        );
    }
    if let Some(image) = input.credential_image {
        update = update.col_expr(professionals::Column::CredentialImage, Expr::value(image));
    }

    update
}

/// Apply a professional patch and return the row as stored afterwards.
pub async fn update_professional(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateProfessional,
) -> Result<professionals::Model, DbErr> {
    let result = professional_update_query(id, input).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(DbErr::RecordNotFound(format!("Professional {id} not found")));
    }

    get_professional_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("Professional {id} not found")))
}

/// Delete a professional by ID.
pub async fn delete_professional(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    professionals::Entity::delete_by_id(id).exec(db).await
}
