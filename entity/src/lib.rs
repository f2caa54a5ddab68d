pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_ship;
pub mod planet;
pub mod ship;
pub mod user;
