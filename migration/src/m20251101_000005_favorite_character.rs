use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000002_character::Character};

static IDX_FAVORITE_CHARACTER_USER_CHARACTER: &str = "idx-favorite_character-user_id-character_id";
static FK_FAVORITE_CHARACTER_USER_ID: &str = "fk-favorite_character-user_id";
static FK_FAVORITE_CHARACTER_CHARACTER_ID: &str = "fk-favorite_character-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table can also be created on SQLite
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacter::Id))
                    .col(integer(FavoriteCharacter::UserId))
                    .col(integer(FavoriteCharacter::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_USER_ID)
                            .from(FavoriteCharacter::Table, FavoriteCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                            .from(FavoriteCharacter::Table, FavoriteCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTER_USER_CHARACTER)
                    .table(FavoriteCharacter::Table)
                    .col(FavoriteCharacter::UserId)
                    .col(FavoriteCharacter::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTER_USER_CHARACTER)
                    .table(FavoriteCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
}
