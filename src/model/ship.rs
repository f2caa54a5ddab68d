use serde::{Deserialize, Serialize};

use crate::{model::field::present, server::model::db::ShipModel};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipDto {
    pub id: i32,
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<i64>,
}

impl From<ShipModel> for ShipDto {
    fn from(ship: ShipModel) -> Self {
        Self {
            id: ship.id,
            name: ship.name,
            model: ship.model,
            manufacturer: ship.manufacturer,
            cost_in_credits: ship.cost_in_credits,
            crew: ship.crew,
        }
    }
}

/// Request body for creating a ship
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateShipDto {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub model: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub manufacturer: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub cost_in_credits: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub crew: Option<Option<i64>>,
}
