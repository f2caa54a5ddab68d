//! Validated inputs for creating rows.
//!
//! Services build these from request DTOs once every required key has been checked,
//! repositories consume them without further validation. A key sent as `null` is present;
//! its nullable column is stored as `NULL`.

use crate::{
    model::{
        character::CreateCharacterDto, planet::CreatePlanetDto, ship::CreateShipDto,
        user::CreateUserDto,
    },
    server::{
        error::validation::ValidationError,
        util::validate::{max_len, max_len_opt, non_empty, require, require_name},
    },
};

/// Column width of every character, planet and ship text field.
pub const TEXT_LEN: usize = 250;
pub const EMAIL_LEN: usize = 120;
pub const PASSWORD_LEN: usize = 80;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl TryFrom<CreateUserDto> for NewUser {
    type Error = ValidationError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        let email = non_empty("email", require("email", dto.email)?)?;
        let password = non_empty("password", require("password", dto.password)?)?;

        Ok(Self {
            email: max_len("email", email, EMAIL_LEN)?,
            password: max_len("password", password, PASSWORD_LEN)?,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
}

impl TryFrom<CreateCharacterDto> for NewCharacter {
    type Error = ValidationError;

    fn try_from(dto: CreateCharacterDto) -> Result<Self, Self::Error> {
        let name = require("name", dto.name)?;
        let birth_year = require("birth_year", dto.birth_year)?;
        let gender = require("gender", dto.gender)?;
        let height = require("height", dto.height)?;
        let skin_color = require("skin_color", dto.skin_color)?;
        let eye_color = require("eye_color", dto.eye_color)?;

        Ok(Self {
            name: require_name(name, TEXT_LEN)?,
            birth_year: max_len_opt("birth_year", birth_year, TEXT_LEN)?,
            gender: max_len_opt("gender", gender, TEXT_LEN)?,
            height: max_len_opt("height", height, TEXT_LEN)?,
            skin_color: max_len_opt("skin_color", skin_color, TEXT_LEN)?,
            eye_color: max_len_opt("eye_color", eye_color, TEXT_LEN)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub orbital_period: Option<String>,
    pub rotation_period: Option<String>,
    pub diameter: Option<String>,
}

impl TryFrom<CreatePlanetDto> for NewPlanet {
    type Error = ValidationError;

    fn try_from(dto: CreatePlanetDto) -> Result<Self, Self::Error> {
        let name = require("name", dto.name)?;
        let climate = require("climate", dto.climate)?;
        let population = require("population", dto.population)?;
        let orbital_period = require("orbital_period", dto.orbital_period)?;
        let rotation_period = require("rotation_period", dto.rotation_period)?;
        let diameter = require("diameter", dto.diameter)?;

        Ok(Self {
            name: require_name(name, TEXT_LEN)?,
            climate: max_len_opt("climate", climate, TEXT_LEN)?,
            population: max_len_opt("population", population, TEXT_LEN)?,
            orbital_period: max_len_opt("orbital_period", orbital_period, TEXT_LEN)?,
            rotation_period: max_len_opt("rotation_period", rotation_period, TEXT_LEN)?,
            diameter: max_len_opt("diameter", diameter, TEXT_LEN)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewShip {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<i64>,
}

impl TryFrom<CreateShipDto> for NewShip {
    type Error = ValidationError;

    fn try_from(dto: CreateShipDto) -> Result<Self, Self::Error> {
        let name = require("name", dto.name)?;
        let model = require("model", dto.model)?;
        let manufacturer = require("manufacturer", dto.manufacturer)?;
        let cost_in_credits = require("cost_in_credits", dto.cost_in_credits)?;
        let crew = require("crew", dto.crew)?;

        Ok(Self {
            name: require_name(name, TEXT_LEN)?,
            model: max_len_opt("model", model, TEXT_LEN)?,
            manufacturer: max_len_opt("manufacturer", manufacturer, TEXT_LEN)?,
            cost_in_credits,
            crew,
        })
    }
}
