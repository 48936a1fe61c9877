//! Evaluation Criterion Model

use serde::{Deserialize, Serialize};
use shared::EvaluationCategory;

/// Weighted evaluation criterion
///
/// Weights express relative importance within a category. The catalog
/// enforces that per-category weights never sum past 100; a single
/// evaluation may still score only a subset of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationCriterion {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: EvaluationCategory,
    pub weight: u32,
}

/// Create criterion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionCreate {
    pub name: String,
    pub description: String,
    pub category: EvaluationCategory,
    pub weight: u32,
}

/// Update criterion payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EvaluationCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}
