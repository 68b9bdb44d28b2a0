//! Domain-level constants.

// =============================================================================
// Greetings
// =============================================================================

/// Greeting returned by the JSON root endpoint
pub const GREETING_MESSAGE: &str = "Olá Mundo!";

/// Page returned by the HTML greeting endpoint
pub const GREETING_HTML: &str = r#"<html>
  <head>
    <title> Nosso olá mundo!</title>
  </head>
  <body>
    <h1> Olá Mundo </h1>
  </body>
</html>"#;

// =============================================================================
// Users
// =============================================================================

/// Entity name used in user error messages
pub const USER_ENTITY: &str = "User";

/// First id handed out by an empty store
pub const FIRST_USER_ID: i64 = 1;

/// Check if an id can ever refer to a stored user
pub fn is_valid_user_id(id: i64) -> bool {
    id >= FIRST_USER_ID
}
