use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::{is_unique_violation, user::UserRepository},
        error::{resource::ResourceError, Error},
        model::resource::NewUser,
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::ResourceError(ResourceError::UserNotFound))` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        Ok(user.into())
    }

    /// Registers a new user.
    ///
    /// Email and password are required and must be non-empty, `is_active` defaults to true.
    /// The email is checked against existing users first; a concurrent registration that slips
    /// past the check is caught by the unique index and reported the same way.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Missing or empty email or password
    /// - `Err(Error::ResourceError(ResourceError::EmailAlreadyRegistered))` - Email in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, dto: CreateUserDto) -> Result<UserDto, Error> {
        let new_user = NewUser::try_from(dto)?;
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&new_user.email).await?.is_some() {
            return Err(ResourceError::EmailAlreadyRegistered(new_user.email).into());
        }

        let email = new_user.email.clone();
        let user = user_repo
            .create(new_user)
            .await
            .map_err(|err| email_conflict_or_db(err, email))?;

        tracing::info!(user_id = %user.id, "Created user");

        Ok(user.into())
    }

    /// Deletes a user along with all of their favorites, returning the deleted user.
    pub async fn delete_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .delete(user_id)
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        tracing::info!(user_id = %user.id, "Deleted user");

        Ok(user.into())
    }
}

/// Maps a unique index violation on insert to the duplicate email error.
fn email_conflict_or_db(err: DbErr, email: String) -> Error {
    if is_unique_violation(&err) {
        ResourceError::EmailAlreadyRegistered(email).into()
    } else {
        err.into()
    }
}
