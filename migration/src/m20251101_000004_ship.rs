use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ship::Table)
                    .if_not_exists()
                    .col(pk_auto(Ship::Id))
                    .col(string_len_null(Ship::Name, 250))
                    .col(string_len_null(Ship::Model, 250))
                    .col(string_len_null(Ship::Manufacturer, 250))
                    .col(big_integer_null(Ship::CostInCredits))
                    .col(big_integer_null(Ship::Crew))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ship {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Crew,
}
