use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Soft-delete flag for users, stored as a lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[sea_orm(unique)]
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub profile_image_url: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub is_email_verified: bool,
    pub is_phone_number_verified: bool,
    pub created_at: DateTimeUtc,
    pub last_login_at: Option<DateTimeUtc>,
    pub account_status: AccountStatus,
    pub preferred_language: String,
    pub is_premium_user: bool,
    pub referral_code: Option<String>,
    pub referred_by: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub service_items_id: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::user_reviews_professionals::Entity")]
    ProfessionalReviews,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::user_reviews_professionals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessionalReviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub profile_image_url: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub is_email_verified: Option<bool>,
    pub is_phone_number_verified: Option<bool>,
    pub preferred_language: Option<String>,
    pub is_premium_user: Option<bool>,
    pub referral_code: Option<String>,
    pub referred_by: Option<String>,
    pub service_items_id: Option<Json>,
}

/// The required fields of a [`CreateUser`], checked and unwrapped.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

impl CreateUser {
    /// Pull out the required fields; blank strings count as missing.
    pub fn required(&self) -> Option<NewUser> {
        let field = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Some(NewUser {
            first_name: field(&self.first_name)?,
            last_name: field(&self.last_name)?,
            email: field(&self.email)?,
            phone_number: field(&self.phone_number)?,
            password: self.password.clone().filter(|p| !p.is_empty())?,
        })
    }
}

/// Sparse patch for a user. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub profile_image_url: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub is_email_verified: Option<bool>,
    pub is_phone_number_verified: Option<bool>,
    pub last_login_at: Option<DateTimeUtc>,
    pub preferred_language: Option<String>,
    pub is_premium_user: Option<bool>,
    pub referral_code: Option<String>,
    pub referred_by: Option<String>,
    pub service_items_id: Option<Json>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.password.is_none()
            && self.profile_image_url.is_none()
            && self.gender.is_none()
            && self.date_of_birth.is_none()
            && self.address_line.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.postal_code.is_none()
            && self.is_email_verified.is_none()
            && self.is_phone_number_verified.is_none()
            && self.last_login_at.is_none()
            && self.preferred_language.is_none()
            && self.is_premium_user.is_none()
            && self.referral_code.is_none()
            && self.referred_by.is_none()
            && self.service_items_id.is_none()
    }

    /// Write every supplied field into `active`. The password must already be hashed.
    pub fn apply(self, active: &mut ActiveModel) {
        use sea_orm::Set;

        if let Some(v) = self.first_name {
            active.first_name = Set(v);
        }
        if let Some(v) = self.last_name {
            active.last_name = Set(v);
        }
        if let Some(v) = self.email {
            active.email = Set(v);
        }
        if let Some(v) = self.phone_number {
            active.phone_number = Set(v);
        }
        if let Some(v) = self.password {
            active.password = Set(v);
        }
        if let Some(v) = self.profile_image_url {
            active.profile_image_url = Set(Some(v));
        }
        if let Some(v) = self.gender {
            active.gender = Set(Some(v));
        }
        if let Some(v) = self.date_of_birth {
            active.date_of_birth = Set(Some(v));
        }
        if let Some(v) = self.address_line {
            active.address_line = Set(Some(v));
        }
        if let Some(v) = self.city {
            active.city = Set(Some(v));
        }
        if let Some(v) = self.state {
            active.state = Set(Some(v));
        }
        if let Some(v) = self.country {
            active.country = Set(Some(v));
        }
        if let Some(v) = self.postal_code {
            active.postal_code = Set(Some(v));
        }
        if let Some(v) = self.is_email_verified {
            active.is_email_verified = Set(v);
        }
        if let Some(v) = self.is_phone_number_verified {
            active.is_phone_number_verified = Set(v);
        }
        if let Some(v) = self.last_login_at {
            active.last_login_at = Set(Some(v));
        }
        if let Some(v) = self.preferred_language {
            active.preferred_language = Set(v);
        }
        if let Some(v) = self.is_premium_user {
            active.is_premium_user = Set(v);
        }
        if let Some(v) = self.referral_code {
            active.referral_code = Set(Some(v));
        }
        if let Some(v) = self.referred_by {
            active.referred_by = Set(Some(v));
        }
        if let Some(v) = self.service_items_id {
            active.service_items_id = Set(v);
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckPhone {
    pub phone_number: String,
}
