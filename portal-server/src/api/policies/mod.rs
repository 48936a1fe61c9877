//! Policy API Module
//!
//! Public read-only catalog; the auth middleware allowlists these paths.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Policy router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/policies", get(handler::list))
        .route("/api/policies/{id}", get(handler::get_by_id))
}
