use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::password::hash_password;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users::{self, CheckPhone, CreateUser, UpdateUser};

/// GET /api/users — list all active users.
pub async fn get_users(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let users = user_db::get_all_users(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/{id} — get a single active user.
pub async fn get_user(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match user_db::get_user_by_id(db.get_ref(), id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ApiError::not_found(format!("User {id} not found"))),
    }
}

/// POST /api/users — register a user. Responds with the new `user_id`.
pub async fn create_user(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateUser>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let Some(mut new_user) = input.required() else {
        return Err(ApiError::validation(
            "First name, last name, email, phone number, and password are required",
        ));
    };

    if user_db::phone_number_taken(db.get_ref(), &new_user.phone_number, None).await? {
        return Err(ApiError::validation("Phone number is already registered"));
    }

    new_user.password = hash_password(&new_user.password)?;
    let user = user_db::insert_user(db.get_ref(), new_user, input).await?;
    tracing::info!(user_id = user.user_id, "user registered");

    Ok(HttpResponse::Created().json(serde_json::json!({ "user_id": user.user_id })))
}

/// PUT /api/users/{id} — patch the supplied fields of an active user.
pub async fn update_user(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateUser>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let user = user_db::get_user_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {id} not found")))?;

    patch_user(db.get_ref(), user, body.into_inner()).await
}

/// PUT /api/users/phone/{phone_number} — same as `update_user`, keyed by phone number.
pub async fn update_user_by_phone(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<UpdateUser>,
) -> Result<HttpResponse, ApiError> {
    let phone_number = path.into_inner();
    let user = user_db::get_user_by_phone(db.get_ref(), &phone_number)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    patch_user(db.get_ref(), user, body.into_inner()).await
}

/// DELETE /api/users/{id} — deactivate a user.
pub async fn delete_user(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !user_db::deactivate_user(db.get_ref(), id).await? {
        return Err(ApiError::not_found(format!("User {id} not found")));
    }
    tracing::info!(user_id = id, "user deactivated");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "User deleted successfully" })))
}

/// POST /api/check-phone — does an active user own this phone number?
///
/// A hit counts as a login and stamps `last_login_at`.
pub async fn check_user_by_phone(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CheckPhone>,
) -> Result<HttpResponse, ApiError> {
    let phone_number = body.phone_number.trim();
    if phone_number.is_empty() {
        return Err(ApiError::validation("phone_number is required"));
    }

    match user_db::touch_user_by_phone(db.get_ref(), phone_number).await? {
        Some(user) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "exists": true,
            "user": user,
        }))),
        None => Ok(HttpResponse::Ok().json(serde_json::json!({ "exists": false }))),
    }
}

async fn patch_user(
    db: &DatabaseConnection,
    user: users::Model,
    mut input: UpdateUser,
) -> Result<HttpResponse, ApiError> {
    if input.is_empty() {
        return Err(ApiError::validation("No fields provided for update"));
    }

    if let Some(phone_number) = &input.phone_number {
        if phone_number.trim().is_empty() {
            return Err(ApiError::validation("phone_number cannot be empty"));
        }
        if *phone_number != user.phone_number
            && user_db::phone_number_taken(db, phone_number, Some(user.user_id)).await?
        {
            return Err(ApiError::validation("Phone number is already registered"));
        }
    }

    if let Some(password) = input.password.take() {
        if password.is_empty() {
            return Err(ApiError::validation("password cannot be empty"));
        }
        input.password = Some(hash_password(&password)?);
    }

    let updated = user_db::update_user(db, user, input).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User updated successfully",
        "user": updated,
    })))
}
