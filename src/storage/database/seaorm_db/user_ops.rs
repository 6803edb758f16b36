use crate::core::models::{NewUser, User};
use crate::storage::repository::UserRepository;
use crate::utils::error::{Result, ServiceError, map_write_error};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

#[async_trait]
impl UserRepository for SeaOrmDatabase {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        debug!("Finding user by username: {}", username);

        let user_model = entities::User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    async fn user_exists(&self, username: &str, email: &str) -> Result<bool> {
        let matches = entities::User::find()
            .filter(
                Condition::any()
                    .add(user::Column::Username.eq(username))
                    .add(user::Column::Email.eq(email)),
            )
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(matches > 0)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        debug!("Creating user: {}", user.username);

        let model = user::Model::from_new_user(user)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, || "User already exists".to_string()))?;

        Ok(model.to_domain_user())
    }

    async fn count_users(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)
    }
}
