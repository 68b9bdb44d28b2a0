//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user and assign it the next id
    async fn create_user(&self, username: String, email: String, password: String)
        -> AppResult<User>;

    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Replace username, email and password of an existing user
    async fn update_user(
        &self,
        id: i64,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User>;

    /// Delete user, returning the removed record
    async fn delete_user(&self, id: i64) -> AppResult<User>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;

    /// Drop every user and restart ids at 1
    async fn clear(&self) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        let user = self.repo.create(username, email, password).await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list_all().await
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(
        &self,
        id: i64,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        let user = self.repo.update(id, username, email, password).await?;
        tracing::info!(user_id = id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<User> {
        let user = self.repo.delete(id).await?;
        tracing::info!(user_id = id, "user deleted");
        Ok(user)
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }

    async fn clear(&self) -> AppResult<()> {
        self.repo.clear().await?;
        tracing::debug!("user store cleared");
        Ok(())
    }
}
