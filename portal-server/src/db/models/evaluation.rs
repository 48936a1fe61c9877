//! Evaluation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scored criterion inside an evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaScore {
    pub criteria_id: u64,
    pub score: u8,
}

/// Evaluation workflow status
///
/// `pending -> approved | rejected`; both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    Pending,
    Approved,
    Rejected,
}

impl EvaluationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, EvaluationStatus::Approved | EvaluationStatus::Rejected)
    }
}

impl std::fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EvaluationStatus::Pending => "pending",
            EvaluationStatus::Approved => "approved",
            EvaluationStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Evaluation record
///
/// Authored by a manager against one employee. The latest evaluation drives
/// the employee's composite scores; approval is a leadership sign-off layer
/// on top, not a gate on score visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: u64,
    pub employee_id: u64,
    pub manager_id: u64,
    pub date: NaiveDate,
    pub status: EvaluationStatus,
    pub criteria_scores: Vec<CriteriaScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<NaiveDate>,
}

/// Submit evaluation payload (author comes from the authenticated manager)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSubmit {
    pub employee_id: u64,
    pub criteria_scores: Vec<CriteriaScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_comment: Option<String>,
}
