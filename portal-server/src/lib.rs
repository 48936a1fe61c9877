//! HR Metric Portal Server - 人力资源考核门户后端
//!
//! # 架构概述
//!
//! 本模块是 Portal Server 的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系，角色访问策略表
//! - **数据层** (`db`): 进程内存储、仓储层、种子数据
//! - **考核评分** (`scoring`): 加权综合评分与晋升评估引擎
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! portal-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、访问策略
//! ├── db/            # 内存存储、模型、仓储
//! ├── scoring/       # 综合评分计算、考核流程引擎
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod scoring;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::{PortalStore, seed};
pub use scoring::EvaluationEngine;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use shared::{ApiErrorCode, ApiResponse};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     __  ___     __       _
   / / / / __ \   /  |/  /__  / /______(_)____
  / /_/ / /_/ /  / /|_/ / _ \/ __/ ___/ / ___/
 / __  / _, _/  / /  / /  __/ /_/ /  / / /__
/_/ /_/_/ |_|  /_/  /_/\___/\__/_/  /_/\___/
    "#
    );
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present; missing file is fine
    let _ = dotenv::dotenv();

    let log_dir = std::env::var("LOG_DIR").ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
