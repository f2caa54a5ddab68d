use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{db::UserModel, resource::NewUser};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, user: NewUser) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            is_active: ActiveValue::Set(user.is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Deletes a user, favorites of the user are removed by the foreign key cascade
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The row as it was before deletion
    /// - `Ok(None)` - No row with the provided ID exists
    pub async fn delete(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        let Some(row) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        entity::prelude::User::delete_by_id(row.id)
            .exec(self.db)
            .await?;

        Ok(Some(row))
    }
}
