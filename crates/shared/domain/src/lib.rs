//! Domain layer - Core entities and wire schemas.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! The HTTP layer and the user service share them.

pub mod constants;
pub mod message;
pub mod user;

pub use constants::*;
pub use message::Message;
pub use user::{User, UserList, UserPublic, UserSchema};
