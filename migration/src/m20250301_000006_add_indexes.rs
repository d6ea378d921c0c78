use sea_orm_migration::prelude::*;

use crate::m20250301_000003_create_professionals_table::Professionals;
use crate::m20250301_000004_create_bookings_table::Bookings;
use crate::m20250301_000005_create_payments_and_reviews::{
    ServiceReviews, UserReviewsProfessionals,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Bookings by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_user_id")
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .to_owned(),
            )
            .await?;

        // Pending feed: status + assignee
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status_professional_id")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .col(Bookings::ProfessionalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_service_id")
                    .table(Bookings::Table)
                    .col(Bookings::ServiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professionals_service_id")
                    .table(Professionals::Table)
                    .col(Professionals::ServiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_reviews_service_id")
                    .table(ServiceReviews::Table)
                    .col(ServiceReviews::ServiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_reviews_professionals_professional_id")
                    .table(UserReviewsProfessionals::Table)
                    .col(UserReviewsProfessionals::ProfessionalId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_bookings_user_id",
            "idx_bookings_status_professional_id",
            "idx_bookings_service_id",
            "idx_professionals_service_id",
            "idx_service_reviews_service_id",
            "idx_user_reviews_professionals_professional_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}
