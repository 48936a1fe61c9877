//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{policy, require_role};
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // 读取路由：登录即可（查看员工名录是基础操作）
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    // 管理路由：仅 admin/manager
    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_role(policy::EMPLOYEE_MANAGE)));

    read_routes.merge(manage_routes)
}
