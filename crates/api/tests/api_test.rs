//! Integration tests for API endpoints.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, each
//! test against its own freshly cleared in-memory store.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use api_lib::routes::create_router;
use api_lib::state::AppState;
use common::ServiceConfig;

// =============================================================================
// Test Helpers
// =============================================================================

struct TestClient {
    router: Router,
    state: AppState,
}

impl TestClient {
    async fn new() -> Self {
        let state = AppState::in_memory(ServiceConfig::default());
        state.user_service.clear().await.unwrap();

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    async fn raw(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, bytes.to_vec())
    }

    async fn send_text(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.raw(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn create(&self, username: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/users/",
                Some(json!({
                    "username": username,
                    "email": format!("{}@mail.com", username),
                    "password": "secret",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

fn not_found() -> Value {
    json!({ "detail": "User not found!" })
}

fn bob() -> Value {
    json!({
        "username": "bob",
        "email": "bob@example.com",
        "password": "mynewpassword",
    })
}

// =============================================================================
// Greeting Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_returns_greeting() {
    let client = TestClient::new().await;

    let (status, body) = client.send(Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Olá Mundo!" }));
}

#[tokio::test]
async fn test_html_returns_greeting_page() {
    let client = TestClient::new().await;

    let (status, bytes) = client.raw(Method::GET, "/html", None).await;

    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8(bytes).unwrap();
    assert!(page.contains("<h1> Olá Mundo </h1>"));
}

#[tokio::test]
async fn test_health_reports_user_count() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client.send(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "users": 1 }));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let client = TestClient::new().await;

    let (status, body) = client.send(Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/{id}"].is_object());
}

#[tokio::test]
async fn test_openapi_document_carries_schema_examples() {
    let client = TestClient::new().await;

    let (_, body) = client.send(Method::GET, "/api-docs/openapi.json", None).await;

    let user_public = &body["components"]["schemas"]["UserPublic"]["properties"];
    assert_eq!(user_public["username"]["example"], "joaozinho");
    assert_eq!(user_public["id"]["example"], 1);
}

#[tokio::test]
async fn test_openapi_health_has_own_tag() {
    let client = TestClient::new().await;

    let (_, body) = client.send(Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(body["paths"]["/health"]["get"]["tags"], json!(["Health"]));
}

// =============================================================================
// Create & List
// =============================================================================

#[tokio::test]
async fn test_create_user() {
    let client = TestClient::new().await;

    let (status, body) = client
        .send(
            Method::POST,
            "/users/",
            Some(json!({
                "username": "joaozinho",
                "email": "joaozinho@mail.com",
                "password": "secret",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": 1, "username": "joaozinho", "email": "joaozinho@mail.com" })
    );
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_read_users_after_create() {
    let client = TestClient::new().await;
    client.create("joaozinho").await;

    let (status, body) = client.send(Method::GET, "/users/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "users": [
                { "id": 1, "username": "joaozinho", "email": "joaozinho@mail.com" }
            ]
        })
    );
}

#[tokio::test]
async fn test_read_users_empty() {
    let client = TestClient::new().await;

    let (status, body) = client.send(Method::GET, "/users/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": [] }));
}

#[tokio::test]
async fn test_list_keeps_creation_order() {
    let client = TestClient::new().await;
    let mut created_ids = Vec::new();
    for name in ["alice", "bob", "carol"] {
        created_ids.push(client.create(name).await["id"].clone());
    }

    let (_, body) = client.send(Method::GET, "/users/", None).await;

    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    let listed_ids: Vec<Value> = users.iter().map(|u| u["id"].clone()).collect();
    assert_eq!(listed_ids, created_ids);
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[tokio::test]
async fn test_create_user_missing_field() {
    let client = TestClient::new().await;

    let (status, body) = client
        .send(
            Method::POST,
            "/users/",
            Some(json!({ "username": "joaozinho", "email": "joaozinho@mail.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert_eq!(client.state.user_service.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_user_wrong_field_type() {
    let client = TestClient::new().await;

    let (status, _) = client
        .send(
            Method::POST,
            "/users/",
            Some(json!({ "username": 42, "email": "x@mail.com", "password": "secret" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_user_invalid_json_syntax() {
    let client = TestClient::new().await;

    let (status, body) = client
        .send_text(Method::POST, "/users/", Some("application/json"), "{not json")
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert_eq!(client.state.user_service.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_user_without_content_type() {
    let client = TestClient::new().await;

    let (status, body) = client
        .send_text(
            Method::POST,
            "/users/",
            None,
            r#"{"username": "joaozinho", "email": "joaozinho@mail.com", "password": "secret"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("Content-Type: application/json"));
    assert_eq!(client.state.user_service.count_users().await.unwrap(), 0);
}

// =============================================================================
// Read One
// =============================================================================

#[tokio::test]
async fn test_get_user() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client.send(Method::GET, "/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "username": "alice", "email": "alice@mail.com" })
    );
}

#[tokio::test]
async fn test_get_user_not_found() {
    let client = TestClient::new().await;

    let (status, body) = client.send(Method::GET, "/users/100", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn test_non_integer_id_is_rejected() {
    let client = TestClient::new().await;

    let (status, body) = client.send(Method::GET, "/users/abc", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_user() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client.send(Method::PUT, "/users/1", Some(bob())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "username": "bob", "email": "bob@example.com" })
    );

    let (_, listed) = client.send(Method::GET, "/users/", None).await;
    assert_eq!(listed["users"][0], body);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client.send(Method::PUT, "/users/100", Some(bob())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn test_update_user_id_zero() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client.send(Method::PUT, "/users/0", Some(bob())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn test_update_user_negative_id() {
    let client = TestClient::new().await;

    let (status, body) = client.send(Method::PUT, "/users/-1", Some(bob())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn test_update_user_missing_field() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client
        .send(
            Method::PUT,
            "/users/1",
            Some(json!({ "email": "bob@example.com", "password": "mynewpassword" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("username"));

    let (_, stored) = client.send(Method::GET, "/users/1", None).await;
    assert_eq!(stored["username"], "alice");
}

#[tokio::test]
async fn test_update_user_malformed_body_on_id_zero() {
    let client = TestClient::new().await;

    let (status, body) = client
        .send_text(Method::PUT, "/users/0", Some("application/json"), "{not json")
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client.send(Method::DELETE, "/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "username": "alice", "email": "alice@mail.com" })
    );

    let (_, listed) = client.send(Method::GET, "/users/", None).await;
    assert_eq!(listed, json!({ "users": [] }));
}

#[tokio::test]
async fn test_delete_user_twice() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (first, _) = client.send(Method::DELETE, "/users/1", None).await;
    let (second, body) = client.send(Method::DELETE, "/users/1", None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn test_delete_user_id_zero() {
    let client = TestClient::new().await;
    client.create("alice").await;

    let (status, body) = client.send(Method::DELETE, "/users/0", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let client = TestClient::new().await;

    let (status, body) = client.send(Method::DELETE, "/users/100", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let client = TestClient::new().await;
    client.create("alice").await;
    client.create("bob").await;
    client.send(Method::DELETE, "/users/2", None).await;

    let carol = client.create("carol").await;

    assert_eq!(carol["id"], 3);
}

// =============================================================================
// Store Reset
// =============================================================================

#[tokio::test]
async fn test_clear_resets_store() {
    let client = TestClient::new().await;
    client.create("alice").await;
    client.create("bob").await;

    client.state.user_service.clear().await.unwrap();

    let (_, listed) = client.send(Method::GET, "/users/", None).await;
    assert_eq!(listed, json!({ "users": [] }));
    assert_eq!(client.create("carol").await["id"], 1);
}
