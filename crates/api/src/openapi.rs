//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use domain::{Message, UserList, UserPublic, UserSchema};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "fast-zero",
        description = "Greeting endpoints and user CRUD over an in-memory store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::handlers::greeting_handler::read_root,
        crate::handlers::greeting_handler::read_html,
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            Message,
            HealthResponse,
            UserSchema,
            UserPublic,
            UserList,
        )
    ),
    tags(
        (name = "Greetings", description = "Static greeting endpoints"),
        (name = "Health", description = "Service health"),
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
