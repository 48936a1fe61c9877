//! Evaluation API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::{policy, require_role};
use crate::core::ServerState;

/// Evaluation router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/evaluations", routes())
}

fn routes() -> Router<ServerState> {
    // 读取路由：考核结果全员可读（karyawan 对他人只读 —— 写入在下面按角色限制）
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/employee/{employee_id}", get(handler::list_by_employee));

    // 提交路由：仅 admin/manager
    let submit_routes = Router::new()
        .route("/", post(handler::submit))
        .layer(middleware::from_fn(require_role(policy::EVALUATION_SUBMIT)));

    // 审批路由：仅 pemimpin
    let approve_routes = Router::new()
        .route("/pending", get(handler::list_pending))
        .route("/{id}/approve", post(handler::approve))
        .route("/{id}/reject", post(handler::reject))
        .layer(middleware::from_fn(require_role(policy::EVALUATION_APPROVE)));

    read_routes.merge(submit_routes).merge(approve_routes)
}
