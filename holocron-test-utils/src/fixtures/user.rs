use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to every fixture user.
pub static TEST_PASSWORD: &str = "may-the-force-be-with-you";

pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an active user with the provided email.
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(TEST_PASSWORD.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
