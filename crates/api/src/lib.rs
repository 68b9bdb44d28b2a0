//! HTTP API Library
//!
//! This crate provides the JSON-over-HTTP surface: greeting endpoints and
//! user CRUD backed by the in-memory user service.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use common::{AppError, AppResult, ServiceConfig};
use tracing::info;

use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ServiceConfig) -> AppResult<()> {
    let addr = config.server_addr();
    let service_name = config.service_name.clone();

    // In-memory store, empty at startup
    let state = AppState::in_memory(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("{} listening on http://{}", service_name, addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
