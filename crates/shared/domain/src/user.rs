//! User domain entity and related schemas.

use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Write-only: never sent back to clients
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create a user record with an id assigned by the store
    pub fn new(id: i64, username: String, email: String, password: String) -> Self {
        Self {
            id,
            username,
            email,
            password,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn replace(&mut self, username: String, email: String, password: String) {
        self.username = username;
        self.email = email;
        self.password = password;
    }
}

/// Request body for creating or replacing a user
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserSchema {
    /// Login name
    #[cfg_attr(feature = "openapi", schema(example = "joaozinho"))]
    pub username: String,
    /// Contact email address
    #[cfg_attr(feature = "openapi", schema(example = "joaozinho@mail.com"))]
    pub email: String,
    /// Plain password, stored as given
    #[cfg_attr(feature = "openapi", schema(example = "secret"))]
    pub password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPublic {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "joaozinho"))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "joaozinho@mail.com"))]
    pub email: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Response body for the user listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserList {
    pub users: Vec<UserPublic>,
}

impl From<Vec<User>> for UserList {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserPublic::from).collect(),
        }
    }
}
