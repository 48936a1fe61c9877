//! Document API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::{policy, require_role};
use crate::core::ServerState;

/// Document router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/documents", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/employee/{employee_id}", get(handler::list_by_employee));

    // 上传路由：仅 karyawan 上传支持文档
    let upload_routes = Router::new()
        .route("/", post(handler::upload))
        .layer(middleware::from_fn(require_role(policy::DOCUMENT_UPLOAD)));

    // 审阅路由：admin/manager/pemimpin
    let review_routes = Router::new()
        .route("/{id}/review", post(handler::review))
        .layer(middleware::from_fn(require_role(policy::DOCUMENT_REVIEW)));

    read_routes.merge(upload_routes).merge(review_routes)
}
