//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，此处统一别名并提供响应辅助函数。
//!
//! # 错误码规范
//!
//! | 前缀 | 分类 | 示例 |
//! |------|------|------|
//! | E2xxx | 权限错误 | E2001 无权限 |
//! | E3xxx | 认证令牌错误 | E3001 未登录, E3002 无效令牌 |
//! | E0xxx | 业务错误 | E0002 验证失败, E0003 资源不存在 |
//! | E9xxx | 系统错误 | E9001 内部错误 |

use axum::Json;
use serde::Serialize;
use shared::ApiResponse;

/// 应用错误类型 (统一使用 shared 错误)
pub use shared::error::ApiError as AppError;

/// Application-level Result type
///
/// Used in HTTP handlers and application logic
pub type AppResult<T> = Result<T, AppError>;

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok_with_message(data, message))
}
