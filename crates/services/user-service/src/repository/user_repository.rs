//! In-memory user repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, OptionExt};
use domain::{is_valid_user_id, User, FIRST_USER_ID};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Ids are handed out by the repository, starting at 1 and never reused
/// until `clear` is called.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under the next id
    async fn create(&self, username: String, email: String, password: String) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// List all users in insertion order
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Overwrite username, email and password of an existing user
    async fn update(
        &self,
        id: i64,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User>;

    /// Remove a user, returning the record as it was before removal
    async fn delete(&self, id: i64) -> AppResult<User>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;

    /// Remove every user and restart ids at 1
    async fn clear(&self) -> AppResult<()>;
}

struct StoreState {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: FIRST_USER_ID,
        }
    }
}

/// Process-local implementation of UserRepository.
///
/// Ids only grow, so ordering the map by id is insertion order.
#[derive(Default)]
pub struct InMemoryUserStore {
    state: RwLock<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, username: String, email: String, password: String) -> AppResult<User> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let user = User::new(id, username, email, password);
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        if !is_valid_user_id(id) {
            return Ok(None);
        }

        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn update(
        &self,
        id: i64,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        if !is_valid_user_id(id) {
            return Err(AppError::user_not_found());
        }

        let mut state = self.state.write().await;
        let user = state.users.get_mut(&id).ok_or_not_found()?;
        user.replace(username, email, password);

        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<User> {
        if !is_valid_user_id(id) {
            return Err(AppError::user_not_found());
        }

        self.state.write().await.users.remove(&id).ok_or_not_found()
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.state.read().await.users.len())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.state.write().await = StoreState::default();
        Ok(())
    }
}
