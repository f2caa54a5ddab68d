use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{
        data::planet::PlanetRepository,
        error::{resource::ResourceError, Error},
        model::resource::NewPlanet,
    },
};

/// Service for listing, creating and deleting planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;

        Ok(planet.into())
    }

    pub async fn create_planet(&self, dto: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let new_planet = NewPlanet::try_from(dto)?;

        let planet = PlanetRepository::new(self.db).create(new_planet).await?;

        tracing::info!(planet_id = %planet.id, "Created planet {}", planet.name);

        Ok(planet.into())
    }

    pub async fn delete_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .delete(planet_id)
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;

        tracing::info!(planet_id = %planet.id, "Deleted planet {}", planet.name);

        Ok(planet.into())
    }
}
