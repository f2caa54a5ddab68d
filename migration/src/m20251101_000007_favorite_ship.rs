use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000004_ship::Ship};

static IDX_FAVORITE_SHIP_USER_SHIP: &str = "idx-favorite_ship-user_id-ship_id";
static FK_FAVORITE_SHIP_USER_ID: &str = "fk-favorite_ship-user_id";
static FK_FAVORITE_SHIP_SHIP_ID: &str = "fk-favorite_ship-ship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table can also be created on SQLite
        manager
            .create_table(
                Table::create()
                    .table(FavoriteShip::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteShip::Id))
                    .col(integer(FavoriteShip::UserId))
                    .col(integer(FavoriteShip::ShipId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_SHIP_USER_ID)
                            .from(FavoriteShip::Table, FavoriteShip::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_SHIP_SHIP_ID)
                            .from(FavoriteShip::Table, FavoriteShip::ShipId)
                            .to(Ship::Table, Ship::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_SHIP_USER_SHIP)
                    .table(FavoriteShip::Table)
                    .col(FavoriteShip::UserId)
                    .col(FavoriteShip::ShipId)
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
                    .name(IDX_FAVORITE_SHIP_USER_SHIP)
                    .table(FavoriteShip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteShip::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteShip {
    Table,
    Id,
    UserId,
    ShipId,
}
