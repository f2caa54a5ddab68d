use serde::{Deserialize, Serialize};

use crate::{model::field::present, server::model::db::CharacterModel};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            birth_year: character.birth_year,
            gender: character.gender,
            height: character.height,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
        }
    }
}

/// Request body for creating a character
///
/// Every key is required, absent keys are reported back to the client rather than rejected
/// by deserialization. Any field except `name` may be `null`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub height: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub skin_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub eye_color: Option<Option<String>>,
}
