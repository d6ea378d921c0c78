use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_users_table::Users;
use crate::m20250301_000002_create_services_table::Services;
use crate::m20250301_000003_create_professionals_table::Professionals;
use crate::m20250301_000004_create_bookings_table::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Payments {
    Table,
    PaymentId,
    BookingId,
    UserId,
    PaymentMethod,
    TransactionId,
    Amount,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum ServiceReviews {
    Table,
    ServiceReviewId,
    Rating,
    Comment,
    ServiceId,
    UserId,
    ProfessionalId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum UserReviewsProfessionals {
    Table,
    ReviewId,
    BookingId,
    UserId,
    ProfessionalId,
    Rating,
    ReviewText,
    CreatedAt,
}

/// Shared `ON DELETE RESTRICT` foreign key; referenced rows cannot be removed
/// while payments or reviews point at them.
fn restrict_fk(
    name: &str,
    from: (impl IntoIden, impl IntoIden),
    to: (impl IntoIden, impl IntoIden),
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(from.0, from.1)
        .to(to.0, to.1)
        .on_delete(ForeignKeyAction::Restrict)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Payments::PaymentId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Payments::BookingId).integer().not_null())
                    .col(ColumnDef::new(Payments::UserId).integer().not_null())
                    .col(ColumnDef::new(Payments::PaymentMethod).string().null())
                    .col(ColumnDef::new(Payments::TransactionId).string().not_null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::Status).string().null())
                    .col(
                        ColumnDef::new(Payments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut restrict_fk(
                        "fk_payments_booking_id",
                        (Payments::Table, Payments::BookingId),
                        (Bookings::Table, Bookings::BookingId),
                    ))
                    .foreign_key(&mut restrict_fk(
                        "fk_payments_user_id",
                        (Payments::Table, Payments::UserId),
                        (Users::Table, Users::UserId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServiceReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceReviews::ServiceReviewId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceReviews::Rating).integer().not_null())
                    .col(ColumnDef::new(ServiceReviews::Comment).text().null())
                    .col(ColumnDef::new(ServiceReviews::ServiceId).integer().not_null())
                    .col(ColumnDef::new(ServiceReviews::UserId).integer().not_null())
                    .col(ColumnDef::new(ServiceReviews::ProfessionalId).integer().not_null())
                    .col(
                        ColumnDef::new(ServiceReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut restrict_fk(
                        "fk_service_reviews_service_id",
                        (ServiceReviews::Table, ServiceReviews::ServiceId),
                        (Services::Table, Services::ServiceId),
                    ))
                    .foreign_key(&mut restrict_fk(
                        "fk_service_reviews_user_id",
                        (ServiceReviews::Table, ServiceReviews::UserId),
                        (Users::Table, Users::UserId),
                    ))
                    .foreign_key(&mut restrict_fk(
                        "fk_service_reviews_professional_id",
                        (ServiceReviews::Table, ServiceReviews::ProfessionalId),
                        (Professionals::Table, Professionals::ProfessionalId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserReviewsProfessionals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserReviewsProfessionals::ReviewId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserReviewsProfessionals::BookingId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserReviewsProfessionals::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(UserReviewsProfessionals::ProfessionalId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserReviewsProfessionals::Rating).integer().not_null())
                    .col(ColumnDef::new(UserReviewsProfessionals::ReviewText).text().null())
                    .col(
                        ColumnDef::new(UserReviewsProfessionals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut restrict_fk(
                        "fk_user_reviews_professionals_booking_id",
                        (UserReviewsProfessionals::Table, UserReviewsProfessionals::BookingId),
                        (Bookings::Table, Bookings::BookingId),
                    ))
                    .foreign_key(&mut restrict_fk(
                        "fk_user_reviews_professionals_user_id",
                        (UserReviewsProfessionals::Table, UserReviewsProfessionals::UserId),
                        (Users::Table, Users::UserId),
                    ))
                    .foreign_key(&mut restrict_fk(
                        "fk_user_reviews_professionals_professional_id",
                        (
                            UserReviewsProfessionals::Table,
                            UserReviewsProfessionals::ProfessionalId,
                        ),
                        (Professionals::Table, Professionals::ProfessionalId),
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserReviewsProfessionals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceReviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}
