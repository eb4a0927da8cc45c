//! HTTP route handlers for the server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//!
//! # Listings API
//! GET  /api/properties          - All listings, insertion order
//! GET  /api/properties/{id}     - Listing detail (404 if unknown)
//! POST /api/properties          - Create listing (201, or 400 if invalid)
//! ```

pub mod properties;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the listing API router.
pub fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(properties::index).post(properties::create))
        .route("/{id}", get(properties::show))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/properties", property_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
