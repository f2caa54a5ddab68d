use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ResourceFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a character with the provided name and fixed descriptive fields.
    pub async fn insert_character(&self, name: &str) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            birth_year: ActiveValue::Set(Some("19BBY".to_string())),
            gender: ActiveValue::Set(Some("male".to_string())),
            height: ActiveValue::Set(Some("172".to_string())),
            skin_color: ActiveValue::Set(Some("fair".to_string())),
            eye_color: ActiveValue::Set(Some("blue".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Insert a planet with the provided name and fixed descriptive fields.
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(Some("arid".to_string())),
            population: ActiveValue::Set(Some("200000".to_string())),
            orbital_period: ActiveValue::Set(Some("304".to_string())),
            rotation_period: ActiveValue::Set(Some("23".to_string())),
            diameter: ActiveValue::Set(Some("10465".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Insert a ship with the provided name and fixed descriptive fields.
    pub async fn insert_ship(&self, name: &str) -> Result<entity::ship::Model, DbErr> {
        entity::ship::ActiveModel {
            name: ActiveValue::Set(Some(name.to_string())),
            model: ActiveValue::Set(Some("T-65 X-wing".to_string())),
            manufacturer: ActiveValue::Set(Some("Incom Corporation".to_string())),
            cost_in_credits: ActiveValue::Set(Some(149_999)),
            crew: ActiveValue::Set(Some(1)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
