//! In-memory portal store
//!
//! One `RwLock<Vec<T>>` per entity collection plus a per-resource id
//! sequence. The collections stand in for a future database; nothing here
//! survives a restart. Locks are never held across an `await`.

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::db::models::{
    Department, Document, Employee, Evaluation, EvaluationCriterion, Policy, User,
};

/// 资源 ID 序列管理器
///
/// 使用 DashMap 实现无锁并发的序列号管理。
/// 每种资源类型维护独立的序列，支持原子递增。
#[derive(Debug, Default)]
pub struct IdSequences {
    seqs: DashMap<String, u64>,
}

impl IdSequences {
    /// 创建空的序列管理器
    pub fn new() -> Self {
        Self {
            seqs: DashMap::new(),
        }
    }

    /// 递增指定资源的序列并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn next(&self, resource: &str) -> u64 {
        let mut entry = self.seqs.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 将序列推进到不小于 `id` 的位置（种子数据使用）
    pub fn advance_past(&self, resource: &str, id: u64) {
        let mut entry = self.seqs.entry(resource.to_string()).or_insert(0);
        if *entry < id {
            *entry = id;
        }
    }
}

/// 进程内门户存储 - 所有实体集合的单例
///
/// | 集合 | 实体 |
/// |------|------|
/// | users | 登录账户 |
/// | employees | 员工档案 |
/// | criteria | 考核标准目录 |
/// | evaluations | 考核记录 |
/// | documents | 支持文档元数据 |
/// | departments | 部门 |
/// | policies | 公司政策 (只读) |
#[derive(Debug, Default)]
pub struct PortalStore {
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) employees: RwLock<Vec<Employee>>,
    pub(crate) criteria: RwLock<Vec<EvaluationCriterion>>,
    pub(crate) evaluations: RwLock<Vec<Evaluation>>,
    pub(crate) documents: RwLock<Vec<Document>>,
    pub(crate) departments: RwLock<Vec<Department>>,
    pub(crate) policies: RwLock<Vec<Policy>>,
    ids: IdSequences,
}

impl PortalStore {
    /// 创建空存储（不含种子数据，测试常用）
    pub fn new() -> Self {
        Self::default()
    }

    /// 为资源分配下一个顺序 ID
    pub fn next_id(&self, resource: &str) -> u64 {
        self.ids.next(resource)
    }

    /// 种子数据写入后推进序列，避免与种子 ID 冲突
    pub(crate) fn claim_id(&self, resource: &str, id: u64) {
        self.ids.advance_past(resource, id);
    }
}
