use sea_orm::DatabaseConnection;

use crate::{
    model::user::{UserDto, UserListDto},
    server::{data::user::UserRepository, error::AppError},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user without their passwords
    pub async fn get_all(&self) -> Result<UserListDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let users: Vec<UserDto> = user_repo
            .get_all()
            .await?
            .into_iter()
            .map(|user| user.into_dto())
            .collect();

        Ok(UserListDto { users })
    }
}
