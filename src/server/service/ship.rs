use sea_orm::DatabaseConnection;

use crate::{
    model::ship::{CreateShipDto, ShipDto},
    server::{
        data::ship::ShipRepository,
        error::{resource::ResourceError, Error},
        model::resource::NewShip,
    },
};

/// Service for listing, creating and deleting ships.
pub struct ShipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_ships(&self) -> Result<Vec<ShipDto>, Error> {
        let ships = ShipRepository::new(self.db).get_all().await?;

        Ok(ships.into_iter().map(ShipDto::from).collect())
    }

    pub async fn get_ship(&self, ship_id: i32) -> Result<ShipDto, Error> {
        let ship = ShipRepository::new(self.db)
            .get_by_id(ship_id)
            .await?
            .ok_or(ResourceError::ShipNotFound(ship_id))?;

        Ok(ship.into())
    }

    pub async fn create_ship(&self, dto: CreateShipDto) -> Result<ShipDto, Error> {
        let new_ship = NewShip::try_from(dto)?;

        let ship = ShipRepository::new(self.db).create(new_ship).await?;

        tracing::info!(ship_id = %ship.id, "Created ship");

        Ok(ship.into())
    }

    pub async fn delete_ship(&self, ship_id: i32) -> Result<ShipDto, Error> {
        let ship = ShipRepository::new(self.db)
            .delete(ship_id)
            .await?
            .ok_or(ResourceError::ShipNotFound(ship_id))?;

        tracing::info!(ship_id = %ship.id, "Deleted ship");

        Ok(ship.into())
    }
}
