use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_users_table::Users;
use crate::m20250301_000002_create_services_table::Services;
use crate::m20250301_000003_create_professionals_table::Professionals;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Bookings {
    Table,
    BookingId,
    ServiceId,
    UserId,
    ProfessionalId,
    ScheduledDate,
    ScheduledTime,
    BookingType,
    Status,
    PaymentStatus,
    TotalAmount,
    AddressLine,
    City,
    State,
    Country,
    PostalCode,
    Latitude,
    Longitude,
    BookingPin,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum BookingRejections {
    Table,
    RejectionId,
    BookingId,
    ProfessionalId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::BookingId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::ServiceId).integer().not_null())
                    .col(ColumnDef::new(Bookings::UserId).integer().not_null())
                    .col(ColumnDef::new(Bookings::ProfessionalId).integer().null())
                    .col(ColumnDef::new(Bookings::ScheduledDate).date().null())
                    .col(ColumnDef::new(Bookings::ScheduledTime).time().null())
                    .col(ColumnDef::new(Bookings::BookingType).string().null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::PaymentStatus)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Bookings::TotalAmount).double().null())
                    .col(ColumnDef::new(Bookings::AddressLine).string().null())
                    .col(ColumnDef::new(Bookings::City).string().null())
                    .col(ColumnDef::new(Bookings::State).string().null())
                    .col(ColumnDef::new(Bookings::Country).string().null())
                    .col(ColumnDef::new(Bookings::PostalCode).string().null())
                    .col(ColumnDef::new(Bookings::Latitude).double().null())
                    .col(ColumnDef::new(Bookings::Longitude).double().null())
                    .col(ColumnDef::new(Bookings::BookingPin).string_len(4).not_null())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_service_id")
                            .from(Bookings::Table, Bookings::ServiceId)
                            .to(Services::Table, Services::ServiceId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_professional_id")
                            .from(Bookings::Table, Bookings::ProfessionalId)
                            .to(Professionals::Table, Professionals::ProfessionalId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingRejections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookingRejections::RejectionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BookingRejections::BookingId).integer().not_null())
                    .col(
                        ColumnDef::new(BookingRejections::ProfessionalId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingRejections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_rejections_booking_id")
                            .from(BookingRejections::Table, BookingRejections::BookingId)
                            .to(Bookings::Table, Bookings::BookingId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_rejections_professional_id")
                            .from(BookingRejections::Table, BookingRejections::ProfessionalId)
                            .to(Professionals::Table, Professionals::ProfessionalId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One rejection per (booking, professional); inserts rely on it for ON CONFLICT.
        manager
            .create_index(
                Index::create()
                    .name("uq_booking_rejections_booking_professional")
                    .table(BookingRejections::Table)
                    .col(BookingRejections::BookingId)
                    .col(BookingRejections::ProfessionalId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingRejections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}
