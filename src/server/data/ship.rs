use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::{db::ShipModel, resource::NewShip};

pub struct ShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    /// Creates a new instance of [`ShipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, ship: NewShip) -> Result<ShipModel, DbErr> {
        let ship = entity::ship::ActiveModel {
            name: ActiveValue::Set(Some(ship.name)),
            model: ActiveValue::Set(ship.model),
            manufacturer: ActiveValue::Set(ship.manufacturer),
            cost_in_credits: ActiveValue::Set(ship.cost_in_credits),
            crew: ActiveValue::Set(ship.crew),
            ..Default::default()
        };

        ship.insert(self.db).await
    }

    /// Gets every ship ordered by ID
    pub async fn get_all(&self) -> Result<Vec<ShipModel>, DbErr> {
        entity::prelude::Ship::find()
            .order_by_asc(entity::ship::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, ship_id: i32) -> Result<Option<ShipModel>, DbErr> {
        entity::prelude::Ship::find_by_id(ship_id).one(self.db).await
    }

    /// Deletes a ship, returning the row as it was before deletion or `None` if absent
    pub async fn delete(&self, ship_id: i32) -> Result<Option<ShipModel>, DbErr> {
        let Some(ship) = self.get_by_id(ship_id).await? else {
            return Ok(None);
        };

        entity::prelude::Ship::delete_by_id(ship.id)
            .exec(self.db)
            .await?;

        Ok(Some(ship))
    }
}
