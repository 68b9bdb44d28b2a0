//! Application state for dependency injection.

use std::sync::Arc;

use common::ServiceConfig;
use user_service_lib::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub config: ServiceConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, config: ServiceConfig) -> Self {
        Self {
            user_service,
            config,
        }
    }

    /// Create app state owning a fresh in-memory user store.
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(user_service_lib::in_memory(), config)
    }
}
