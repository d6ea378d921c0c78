use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// Booking status stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// SeaORM entity for the `bookings` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub booking_id: i32,
    pub service_id: i32,
    pub user_id: i32,
    pub professional_id: Option<i32>,
    pub scheduled_date: Option<Date>,
    pub scheduled_time: Option<Time>,
    pub booking_type: Option<String>,
    pub status: BookingStatus,
    pub payment_status: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub total_amount: Option<f64>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub longitude: Option<f64>,
    pub booking_pin: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::ServiceId"
    )]
    Service,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::professionals::Entity",
        from = "Column::ProfessionalId",
        to = "super::professionals::Column::ProfessionalId"
    )]
    Professional,
    #[sea_orm(has_many = "super::booking_rejections::Entity")]
    Rejections,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::professionals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professional.def()
    }
}

impl Related<super::booking_rejections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rejections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

pub const DEFAULT_PAYMENT_STATUS: &str = "pending";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBooking {
    pub service_id: Option<i32>,
    pub user_id: Option<i32>,
    pub professional_id: Option<i32>,
    pub scheduled_date: Option<Date>,
    pub scheduled_time: Option<Time>,
    pub booking_type: Option<String>,
    pub payment_status: Option<String>,
    pub total_amount: Option<f64>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CreateBooking {
    /// Build the row for a new booking: status pending, payment pending unless
    /// given, professional left unset unless explicitly supplied.
    pub fn into_active_model(
        self,
        booking_pin: String,
        now: DateTimeUtc,
    ) -> Result<ActiveModel, String> {
        let (Some(service_id), Some(user_id)) = (self.service_id, self.user_id) else {
            return Err("service_id and user_id are required".to_string());
        };
        if let Some(amount) = self.total_amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err("total_amount must be a non-negative number".to_string());
            }
        }

        Ok(ActiveModel {
            service_id: Set(service_id),
            user_id: Set(user_id),
            professional_id: Set(self.professional_id),
            scheduled_date: Set(self.scheduled_date),
            scheduled_time: Set(self.scheduled_time),
            booking_type: Set(self.booking_type),
            status: Set(BookingStatus::Pending),
            payment_status: Set(self
                .payment_status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PAYMENT_STATUS.to_string())),
            total_amount: Set(self.total_amount),
            address_line: Set(self.address_line),
            city: Set(self.city),
            state: Set(self.state),
            country: Set(self.country),
            postal_code: Set(self.postal_code),
            latitude: Set(self.latitude),
            longitude: Set(self.longitude),
            booking_pin: Set(booking_pin),
            created_at: Set(now),
            ..Default::default()
        })
    }
}

/// Status transitions a client may request through `PUT /bookings/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    Accepted,
    Rejected,
    Cancelled,
}

/// Body of `PUT /bookings/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBooking {
    pub status: Option<BookingAction>,
    pub professional_id: Option<i32>,
    #[serde(flatten)]
    pub fields: BookingFields,
}

/// The plain columns of a booking that can be patched. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookingFields {
    pub service_id: Option<i32>,
    pub user_id: Option<i32>,
    pub scheduled_date: Option<Date>,
    pub scheduled_time: Option<Time>,
    pub booking_type: Option<String>,
    pub payment_status: Option<String>,
    pub total_amount: Option<f64>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl BookingFields {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, active: &mut ActiveModel) {
        if let Some(v) = self.service_id {
            active.service_id = Set(v);
        }
        if let Some(v) = self.user_id {
            active.user_id = Set(v);
        }
        if let Some(v) = self.scheduled_date {
            active.scheduled_date = Set(Some(v));
        }
        if let Some(v) = self.scheduled_time {
            active.scheduled_time = Set(Some(v));
        }
        if let Some(v) = self.booking_type {
            active.booking_type = Set(Some(v));
        }
        if let Some(v) = self.payment_status {
            active.payment_status = Set(v);
        }
        if let Some(v) = self.total_amount {
            active.total_amount = Set(Some(v));
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
        if let Some(v) = self.latitude {
            active.latitude = Set(Some(v));
        }
        if let Some(v) = self.longitude {
            active.longitude = Set(Some(v));
        }
    }
}

/// What a `PUT /bookings/{id}` body asks for, after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingCommand {
    Accept { professional_id: i32 },
    Reject { professional_id: i32 },
    Cancel,
    Patch(BookingFields),
}

impl UpdateBooking {
    pub fn into_command(self) -> Result<BookingCommand, String> {
        match self.status {
            Some(BookingAction::Accepted) => self
                .professional_id
                .map(|professional_id| BookingCommand::Accept { professional_id })
                .ok_or_else(|| "A valid professional_id is required to accept a booking".to_string()),
            Some(BookingAction::Rejected) => self
                .professional_id
                .map(|professional_id| BookingCommand::Reject { professional_id })
                .ok_or_else(|| "A valid professional_id is required to reject a booking".to_string()),
            Some(BookingAction::Cancelled) => Ok(BookingCommand::Cancel),
            None if self.professional_id.is_some() => Err(
                "professional_id can only be set by accepting the booking (status: \"accepted\")"
                    .to_string(),
            ),
            None if self.fields.is_empty() => Err("No fields provided for update".to_string()),
            None => Ok(BookingCommand::Patch(self.fields)),
        }
    }
}

/// A booking joined with the title and image of its service.
#[derive(Debug, Clone, Serialize)]
pub struct UserBooking {
    #[serde(flatten)]
    pub booking: Model,
    pub service_title: Option<String>,
    pub service_image: Option<String>,
}

/// Random 4-digit PIN, zero padded, shown to the user for in-person verification.
pub fn generate_booking_pin() -> String {
    use rand::Rng;

    format!("{:04}", rand::thread_rng().gen_range(0..10_000))
}
