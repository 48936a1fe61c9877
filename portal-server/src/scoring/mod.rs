//! 考核评分模块
//!
//! 综合评分与晋升评估：
//! - [`calculator`] - 加权平均综合分、晋升分数的纯计算
//! - [`engine`] - 考核提交/审批流程引擎 ([`EvaluationEngine`])

pub mod calculator;
pub mod engine;

pub use calculator::{
    CompositeScores, PROMOTION_THRESHOLD, composite_scores, is_promotion_candidate,
    promotion_score,
};
pub use engine::EvaluationEngine;
