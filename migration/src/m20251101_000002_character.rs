use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 250))
                    .col(string_len_null(Character::BirthYear, 250))
                    .col(string_len_null(Character::Gender, 250))
                    .col(string_len_null(Character::Height, 250))
                    .col(string_len_null(Character::SkinColor, 250))
                    .col(string_len_null(Character::EyeColor, 250))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    Gender,
    Height,
    SkinColor,
    EyeColor,
}
