use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to planet: the destination is only validated at scheduling time.
        manager
            .create_table(
                Table::create()
                    .table(Launch::Table)
                    .if_not_exists()
                    .col(integer(Launch::FlightNumber).primary_key())
                    .col(string(Launch::Mission))
                    .col(string(Launch::Rocket))
                    .col(timestamp(Launch::LaunchDate))
                    .col(json(Launch::Customers))
                    .col(boolean(Launch::Upcoming))
                    .col(boolean_null(Launch::Success))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Launch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Launch {
    Table,
    FlightNumber,
    Mission,
    Rocket,
    LaunchDate,
    Customers,
    Upcoming,
    Success,
}
