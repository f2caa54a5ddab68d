use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 250))
                    .col(string_len_null(Planet::Climate, 250))
                    .col(string_len_null(Planet::Population, 250))
                    .col(string_len_null(Planet::OrbitalPeriod, 250))
                    .col(string_len_null(Planet::RotationPeriod, 250))
                    .col(string_len_null(Planet::Diameter, 250))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Climate,
    Population,
    OrbitalPeriod,
    RotationPeriod,
    Diameter,
}
