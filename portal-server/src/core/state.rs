use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{PortalStore, seed};
use crate::scoring::EvaluationEngine;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是门户后端的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<PortalStore> | 进程内存储 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | engine | EvaluationEngine | 考核评分引擎 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 进程内存储 (会话私有，重启即重置)
    pub store: Arc<PortalStore>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 考核评分引擎
    pub engine: EvaluationEngine,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 空存储
    /// 2. 种子数据 (用户、员工、标准、政策等)
    /// 3. JWT 服务、评分引擎
    pub fn initialize(config: &Config) -> Self {
        let store = Arc::new(PortalStore::new());
        seed::seed(&store);

        Self::with_store(config.clone(), store)
    }

    /// 使用现有存储构造状态（测试常用：可注入未种子化的存储）
    pub fn with_store(config: Config, store: Arc<PortalStore>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let engine = EvaluationEngine::new(store.clone());

        Self {
            config,
            store,
            jwt_service,
            engine,
        }
    }

    /// 获取存储引用
    pub fn store(&self) -> Arc<PortalStore> {
        self.store.clone()
    }

    /// 获取 JWT 服务
    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取考核评分引擎
    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }
}
