//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`policies`] - 政策目录 (公开只读)
//! - [`employees`] - 员工档案接口
//! - [`departments`] - 部门接口
//! - [`criteria`] - 考核标准目录接口
//! - [`evaluations`] - 考核提交与审批接口
//! - [`documents`] - 支持文档接口
//! - [`promotions`] - 晋升候选接口

pub mod auth;
pub mod health;

// Data models API
pub mod criteria;
pub mod departments;
pub mod documents;
pub mod employees;
pub mod evaluations;
pub mod policies;
pub mod promotions;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

/// Build the full application router
///
/// Every `/api/` route passes the global [`require_auth`] middleware;
/// public paths are allowlisted inside it. Role restrictions are applied
/// per route group in each resource module.
///
/// [`require_auth`]: crate::auth::require_auth
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(policies::router())
        .merge(employees::router())
        .merge(departments::router())
        .merge(criteria::router())
        .merge(evaluations::router())
        .merge(documents::router())
        .merge(promotions::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
