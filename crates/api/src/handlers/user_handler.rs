//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{UserList, UserPublic, UserSchema};

use crate::extractors::{UserId, ValidatedJson};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = UserSchema,
    responses(
        (status = 201, description = "User created", body = UserPublic),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserSchema>,
) -> AppResult<(StatusCode, Json<UserPublic>)> {
    let user = state
        .user_service
        .create_user(payload.username, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserPublic::from(user))))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = UserList)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserList>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(UserList::from(users)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserPublic),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<UserPublic>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserPublic::from(user)))
}

/// Replace a user's username, email and password
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserSchema,
    responses(
        (status = 200, description = "User updated", body = UserPublic),
        (status = 404, description = "User not found"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<UserSchema>,
) -> AppResult<Json<UserPublic>> {
    let user = state
        .user_service
        .update_user(id, payload.username, payload.email, payload.password)
        .await?;

    Ok(Json(UserPublic::from(user)))
}

/// Delete a user, returning the removed record
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserPublic),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<UserPublic>> {
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(UserPublic::from(user)))
}
