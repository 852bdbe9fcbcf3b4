use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_uniq(Vehicle::Name))
                    .col(string_null(Vehicle::Model))
                    .col(string_null(Vehicle::VehicleClass))
                    .col(string_null(Vehicle::Manufacturer))
                    .col(string_null(Vehicle::Length))
                    .col(string_null(Vehicle::CostInCredits))
                    .col(string_null(Vehicle::Crew))
                    .col(string_null(Vehicle::Passengers))
                    .col(string_null(Vehicle::MaxAtmospheringSpeed))
                    .col(string_null(Vehicle::CargoCapacity))
                    .col(string_null(Vehicle::Consumables))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    Manufacturer,
    Length,
    CostInCredits,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    CargoCapacity,
    Consumables,
}
