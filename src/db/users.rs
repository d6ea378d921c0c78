use sea_orm::prelude::Expr;
use sea_orm::*;

use crate::models::users::{self, AccountStatus, CreateUser, NewUser, UpdateUser};

/// Users whose account has not been deactivated.
fn active() -> Select<users::Entity> {
    users::Entity::find().filter(users::Column::AccountStatus.eq(AccountStatus::Active))
}

/// Insert a new user. `new_user.password` must already be hashed.
pub async fn insert_user(
    db: &DatabaseConnection,
    new_user: NewUser,
    input: CreateUser,
) -> Result<users::Model, DbErr> {
    let user = users::ActiveModel {
        first_name: Set(new_user.first_name),
        last_name: Set(new_user.last_name),
        email: Set(new_user.email),
        phone_number: Set(new_user.phone_number),
        password: Set(new_user.password),
        profile_image_url: Set(input.profile_image_url),
        gender: Set(input.gender),
        date_of_birth: Set(input.date_of_birth),
        address_line: Set(input.address_line),
        city: Set(input.city),
        state: Set(input.state),
        country: Set(input.country),
        postal_code: Set(input.postal_code),
        is_email_verified: Set(input.is_email_verified.unwrap_or(false)),
        is_phone_number_verified: Set(input.is_phone_number_verified.unwrap_or(false)),
        created_at: Set(chrono::Utc::now()),
        last_login_at: Set(None),
        account_status: Set(AccountStatus::Active),
        preferred_language: Set(input
            .preferred_language
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| "en".to_string())),
        is_premium_user: Set(input.is_premium_user.unwrap_or(false)),
        referral_code: Set(input.referral_code.filter(|c| !c.trim().is_empty())),
        referred_by: Set(input.referred_by),
        service_items_id: Set(input
            .service_items_id
            .unwrap_or_else(|| serde_json::json!([]))),
        ..Default::default()
    };

    user.insert(db).await
}

/// Fetch all active users.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    active().order_by_asc(users::Column::UserId).all(db).await
}

/// Fetch a single active user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<users::Model>, DbErr> {
    active().filter(users::Column::UserId.eq(id)).one(db).await
}

/// Fetch a single active user by phone number.
pub async fn get_user_by_phone(
    db: &DatabaseConnection,
    phone_number: &str,
) -> Result<Option<users::Model>, DbErr> {
    active()
        .filter(users::Column::PhoneNumber.eq(phone_number))
        .one(db)
        .await
}

/// Whether any user other than `except` already uses the phone number,
/// deactivated accounts included (the column is unique).
pub async fn phone_number_taken(
    db: &DatabaseConnection,
    phone_number: &str,
    except: Option<i32>,
) -> Result<bool, DbErr> {
    let mut query = users::Entity::find().filter(users::Column::PhoneNumber.eq(phone_number));
    if let Some(id) = except {
        query = query.filter(users::Column::UserId.ne(id));
    }
    Ok(query.count(db).await? > 0)
}

/// Look up an active user by phone and stamp `last_login_at` when found.
pub async fn touch_user_by_phone(
    db: &DatabaseConnection,
    phone_number: &str,
) -> Result<Option<users::Model>, DbErr> {
    let Some(user) = get_user_by_phone(db, phone_number).await? else {
        return Ok(None);
    };

    let mut active: users::ActiveModel = user.into();
    active.last_login_at = Set(Some(chrono::Utc::now()));

    active.update(db).await.map(Some)
}

/// Patch the supplied fields of an active user. The password in `input` must already be hashed.
pub async fn update_user(
    db: &DatabaseConnection,
    user: users::Model,
    input: UpdateUser,
) -> Result<users::Model, DbErr> {
    let mut active: users::ActiveModel = user.into();
    input.apply(&mut active);

    active.update(db).await
}

/// Soft delete: deactivate an active user. Returns false when there was no active user with that id.
pub async fn deactivate_user(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = users::Entity::update_many()
        .col_expr(users::Column::AccountStatus, Expr::value(AccountStatus::Inactive))
        .filter(users::Column::UserId.eq(id))
        .filter(users::Column::AccountStatus.eq(AccountStatus::Active))
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}
