use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::{db::PlanetModel, resource::NewPlanet};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, planet: NewPlanet) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            climate: ActiveValue::Set(planet.climate),
            population: ActiveValue::Set(planet.population),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            diameter: ActiveValue::Set(planet.diameter),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Deletes a planet, returning the row as it was before deletion or `None` if absent
    pub async fn delete(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        let Some(planet) = self.get_by_id(planet_id).await? else {
            return Ok(None);
        };

        entity::prelude::Planet::delete_by_id(planet.id)
            .exec(self.db)
            .await?;

        Ok(Some(planet))
    }
}
