//! Greeting handlers.

use axum::{
    response::{Html, Json},
    routing::get,
    Router,
};

use domain::{Message, GREETING_HTML, GREETING_MESSAGE};

use crate::state::AppState;

/// Create greeting routes.
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/html", get(read_html))
}

/// JSON greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Greetings",
    responses(
        (status = 200, description = "Greeting message", body = Message)
    )
)]
pub async fn read_root() -> Json<Message> {
    Json(Message::new(GREETING_MESSAGE))
}

/// HTML greeting
#[utoipa::path(
    get,
    path = "/html",
    tag = "Greetings",
    responses(
        (status = 200, description = "Greeting page", body = String, content_type = "text/html")
    )
)]
pub async fn read_html() -> Html<&'static str> {
    Html(GREETING_HTML)
}
