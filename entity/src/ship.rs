use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_ship::Entity")]
    FavoriteShip,
}

impl Related<super::favorite_ship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteShip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
