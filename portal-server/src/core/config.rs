use crate::auth::JwtConfig;

/// 服务器配置 - 门户后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_DIR | (无) | 日志目录，设置后写滚动日志文件 |
/// | JWT_SECRET | (开发环境自动生成) | JWT 密钥，至少 32 字符 |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌过期时间(分钟) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 JWT_SECRET=... cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, jwt: JwtConfig) -> Self {
        Self {
            http_port,
            jwt,
            environment: "test".into(),
        }
    }
}
