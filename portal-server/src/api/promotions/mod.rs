//! Promotion API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Promotion router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/promotions/candidates", get(handler::candidates))
}
