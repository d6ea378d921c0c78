use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vetting state of a professional account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ProfessionalStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl std::str::FromStr for ProfessionalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("invalid status value: '{other}'")),
        }
    }
}

/// SeaORM entity for the `professionals` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professionals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub professional_id: i32,
    pub user_id: i32,
    pub service_id: i32,
    pub status: ProfessionalStatus,
    #[sea_orm(column_type = "Double")]
    pub money_earned: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub credential_image: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::ServiceId"
    )]
    Service,
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfessional {
    pub user_id: i32,
    pub service_id: i32,
    pub status: Option<ProfessionalStatus>,
}

/// Sparse patch for a professional. `money_earned` is a delta added to the
/// stored total, not a replacement value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfessional {
    pub user_id: Option<i32>,
    pub service_id: Option<i32>,
    pub status: Option<ProfessionalStatus>,
    pub money_earned: Option<f64>,
    /// Already-encoded data URI; uploads fill this from the file part.
    pub credential_image: Option<String>,
}

impl UpdateProfessional {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.service_id.is_none()
            && self.status.is_none()
            && self.money_earned.is_none()
            && self.credential_image.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.is_empty() {
            return Err("No fields provided for update".to_string());
        }
        if let Some(delta) = self.money_earned {
            if !delta.is_finite() {
                return Err("money_earned must be a number".to_string());
            }
        }
        Ok(())
    }

    /// Set one text field of a multipart form. Unknown names are ignored and
    /// empty values count as absent.
    pub fn apply_form_field(&mut self, name: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }
        let number = |field: &str| format!("{field} must be a number");

        match name {
            "user_id" => self.user_id = Some(value.parse().map_err(|_| number("user_id"))?),
            "service_id" => {
                self.service_id = Some(value.parse().map_err(|_| number("service_id"))?)
            }
            "money_earned" => {
                self.money_earned = Some(value.parse().map_err(|_| number("money_earned"))?)
            }
            "status" => self.status = Some(value.parse()?),
            _ => {}
        }
        Ok(())
    }
}

/// Largest credential image accepted, in bytes.
pub const MAX_CREDENTIAL_BYTES: usize = 5 * 1024 * 1024;

/// Encode an uploaded file as a self-describing `data:` URI.
pub fn credential_data_uri(content_type: Option<&str>, bytes: &[u8]) -> String {
    let mime = content_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
