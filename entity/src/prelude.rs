pub use super::character::Entity as Character;
pub use super::favorite_character::Entity as FavoriteCharacter;
pub use super::favorite_planet::Entity as FavoritePlanet;
pub use super::favorite_ship::Entity as FavoriteShip;
pub use super::planet::Entity as Planet;
pub use super::ship::Entity as Ship;
pub use super::user::Entity as User;
