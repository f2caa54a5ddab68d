//! Factory functions for in-memory database models.
//!
//! Pure functions returning models with standard test values, for unit tests that do not
//! need a database.

pub fn mock_user_model(id: i32, email: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        email: email.to_string(),
        password: crate::fixtures::user::TEST_PASSWORD.to_string(),
        is_active: true,
    }
}

pub fn mock_character_model(id: i32, name: &str) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        birth_year: Some("19BBY".to_string()),
        gender: Some("male".to_string()),
        height: Some("172".to_string()),
        skin_color: Some("fair".to_string()),
        eye_color: Some("blue".to_string()),
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        climate: Some("arid".to_string()),
        population: Some("200000".to_string()),
        orbital_period: Some("304".to_string()),
        rotation_period: Some("23".to_string()),
        diameter: Some("10465".to_string()),
    }
}

/// Create a ship model, `None` yields an unnamed ship.
pub fn mock_ship_model(id: i32, name: Option<&str>) -> entity::ship::Model {
    entity::ship::Model {
        id,
        name: name.map(str::to_string),
        model: Some("T-65 X-wing".to_string()),
        manufacturer: Some("Incom Corporation".to_string()),
        cost_in_credits: Some(149_999),
        crew: Some(1),
    }
}
