//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, so signatures across
//! the server read without the full `entity::<table>::Model` path.

/// A user account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `password` - Stored as provided
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

pub type CharacterModel = entity::character::Model;

pub type PlanetModel = entity::planet::Model;

pub type ShipModel = entity::ship::Model;

/// Join row linking a user to a favorited character.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Join row linking a user to a favorited planet.
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// Join row linking a user to a favorited ship.
pub type FavoriteShipModel = entity::favorite_ship::Model;
