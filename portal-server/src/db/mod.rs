//! 数据层 - 进程内存储
//!
//! 所有实体保存在进程内存中（会话私有，重启即重置），通过仓储层访问。
//! 仓储接口是未来真实数据库的替换缝：所有业务操作只依赖仓储方法，
//! 从不直接操作底层集合。
//!
//! # 模块结构
//!
//! - [`store`] - [`PortalStore`] 内存集合 + ID 序列
//! - [`models`] - 实体模型
//! - [`repository`] - 仓储层 (CRUD + 业务约束)
//! - [`seed`] - 启动种子数据

pub mod models;
pub mod repository;
pub mod seed;
pub mod store;

pub use store::PortalStore;
