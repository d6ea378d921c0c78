use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Services {
    Table,
    ServiceId,
    ServiceTitle,
    Description,
    MainDescription,
    ServiceType,
    ServicePrice,
    ServiceDuration,
    CategoryId,
    ServiceImage,
    Location,
    IsActive,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::ServiceId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::ServiceTitle).string().not_null())
                    .col(ColumnDef::new(Services::Description).json_binary().not_null())
                    .col(ColumnDef::new(Services::MainDescription).json_binary().null())
                    .col(ColumnDef::new(Services::ServiceType).string().not_null())
                    .col(ColumnDef::new(Services::ServicePrice).double().not_null())
                    .col(ColumnDef::new(Services::ServiceDuration).string().not_null())
                    .col(ColumnDef::new(Services::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Services::ServiceImage).text().not_null())
                    .col(ColumnDef::new(Services::Location).string().null())
                    .col(
                        ColumnDef::new(Services::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}
