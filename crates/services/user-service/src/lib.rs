//! User Service Library
//!
//! This crate provides user management over an in-memory store.
//! The HTTP layer embeds it directly through the `UserService` trait.

pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::repository::InMemoryUserStore;
use crate::service::{UserManager, UserService};

/// Build a user service backed by a fresh, empty in-memory store.
pub fn in_memory() -> Arc<dyn UserService> {
    Arc::new(UserManager::new(Arc::new(InMemoryUserStore::new())))
}
