//! Department API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{policy, require_role};
use crate::core::ServerState;

/// Department router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/departments", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_role(policy::DEPARTMENT_MANAGE)));

    read_routes.merge(manage_routes)
}
