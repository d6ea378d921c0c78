use sea_orm::prelude::Expr;
use sea_orm::sea_query::{OnConflict, Query};
use sea_orm::*;

use crate::models::booking_rejections;
use crate::models::bookings::{self, BookingFields, BookingStatus, UserBooking};
use crate::models::services;

/// Result of trying to assign (or decline) a booking for a professional.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    /// The write went through; carries the booking as it is now.
    Updated(bookings::Model),
    /// No active booking with that id.
    NotFound,
    /// The booking is held by this professional, so nothing was written.
    HeldBy(i32),
}

/// Bookings that have not been cancelled.
fn active() -> Select<bookings::Entity> {
    bookings::Entity::find().filter(bookings::Column::Status.ne(BookingStatus::Cancelled))
}

/// Insert a new booking row.
pub async fn insert_booking(
    db: &DatabaseConnection,
    new_booking: bookings::ActiveModel,
) -> Result<bookings::Model, DbErr> {
    new_booking.insert(db).await
}

/// Fetch all active bookings.
pub async fn get_all_bookings(db: &DatabaseConnection) -> Result<Vec<bookings::Model>, DbErr> {
    active()
        .order_by_asc(bookings::Column::BookingId)
        .all(db)
        .await
}

/// Fetch a single active booking by ID.
pub async fn get_booking_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<bookings::Model>, DbErr> {
    active()
        .filter(bookings::Column::BookingId.eq(id))
        .one(db)
        .await
}

/// Fetch a user's active bookings together with the booked service's title and image.
pub async fn get_bookings_by_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<UserBooking>, DbErr> {
    let rows = active()
        .filter(bookings::Column::UserId.eq(user_id))
        .order_by_desc(bookings::Column::CreatedAt)
        .find_also_related(services::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(booking, service)| UserBooking {
            booking,
            service_title: service.as_ref().map(|s| s.service_title.clone()),
            service_image: service.map(|s| s.service_image),
        })
        .collect())
}

/// Query for the work list of a professional: unclaimed pending bookings they
/// have not declined, plus the bookings they have accepted.
pub fn pending_for_professional_query(professional_id: i32) -> Select<bookings::Entity> {
    let declined = Query::select()
        .column(booking_rejections::Column::BookingId)
        .from(booking_rejections::Entity)
        .and_where(booking_rejections::Column::ProfessionalId.eq(professional_id))
        .to_owned();

    bookings::Entity::find()
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(bookings::Column::Status.eq(BookingStatus::Pending))
                        .add(bookings::Column::ProfessionalId.is_null())
                        .add(bookings::Column::BookingId.not_in_subquery(declined)),
                )
                .add(
                    Condition::all()
                        .add(bookings::Column::Status.eq(BookingStatus::Accepted))
                        .add(bookings::Column::ProfessionalId.eq(professional_id)),
                ),
        )
        .order_by_asc(bookings::Column::BookingId)
}

pub async fn get_pending_for_professional(
    db: &DatabaseConnection,
    professional_id: i32,
) -> Result<Vec<bookings::Model>, DbErr> {
    pending_for_professional_query(professional_id)
        .all(db)
        .await
}

/// Accept a booking for a professional in one conditional UPDATE.
///
/// The row is only written while it is not cancelled and is either unassigned
/// or already assigned to the same professional, so two concurrent accepts for
/// one booking cannot both succeed.
pub async fn accept_booking(
    db: &DatabaseConnection,
    id: i32,
    professional_id: i32,
) -> Result<AssignmentOutcome, DbErr> {
    let result = bookings::Entity::update_many()
        .col_expr(bookings::Column::Status, Expr::value(BookingStatus::Accepted))
        .col_expr(bookings::Column::ProfessionalId, Expr::value(professional_id))
        .filter(bookings::Column::BookingId.eq(id))
        .filter(bookings::Column::Status.ne(BookingStatus::Cancelled))
        .filter(
            Condition::any()
                .add(bookings::Column::ProfessionalId.is_null())
                .add(bookings::Column::ProfessionalId.eq(professional_id)),
        )
        .exec(db)
        .await?;

    let current = get_booking_by_id(db, id).await?;

    Ok(match current {
        None => AssignmentOutcome::NotFound,
        Some(booking) if result.rows_affected > 0 => AssignmentOutcome::Updated(booking),
        Some(booking) => match booking.professional_id {
            Some(holder) => AssignmentOutcome::HeldBy(holder),
            // Nothing holds the row, yet the update missed it: it was cancelled in between.
            None => AssignmentOutcome::NotFound,
        },
    })
}

/// Record that a professional declined a booking. The booking itself is left
/// as is so other professionals keep seeing it. Declining twice is a no-op.
pub async fn reject_booking(
    db: &DatabaseConnection,
    id: i32,
    professional_id: i32,
) -> Result<AssignmentOutcome, DbErr> {
    let Some(booking) = get_booking_by_id(db, id).await? else {
        return Ok(AssignmentOutcome::NotFound);
    };

    if booking.status == BookingStatus::Accepted && booking.professional_id == Some(professional_id)
    {
        return Ok(AssignmentOutcome::HeldBy(professional_id));
    }

    let rejection = booking_rejections::ActiveModel {
        booking_id: Set(id),
        professional_id: Set(professional_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    booking_rejections::Entity::insert(rejection)
        .on_conflict(
            OnConflict::columns([
                booking_rejections::Column::BookingId,
                booking_rejections::Column::ProfessionalId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(AssignmentOutcome::Updated(booking))
}

/// Patch the supplied fields of an active booking.
pub async fn update_booking(
    db: &DatabaseConnection,
    id: i32,
    fields: BookingFields,
) -> Result<bookings::Model, DbErr> {
    let booking = get_booking_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("Booking {id} not found")))?;

    let mut active: bookings::ActiveModel = booking.into();
    fields.apply(&mut active);

    active.update(db).await
}

/// Soft delete: mark an active booking as cancelled. Returns false when there
/// was no active booking with that id.
pub async fn cancel_booking(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = bookings::Entity::update_many()
        .col_expr(bookings::Column::Status, Expr::value(BookingStatus::Cancelled))
        .filter(bookings::Column::BookingId.eq(id))
        .filter(bookings::Column::Status.ne(BookingStatus::Cancelled))
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}

/// Count bookings for a service that are still pending or accepted.
pub async fn count_open_bookings_for_service(
    db: &DatabaseConnection,
    service_id: i32,
) -> Result<u64, DbErr> {
    active()
        .filter(bookings::Column::ServiceId.eq(service_id))
        .count(db)
        .await
}
