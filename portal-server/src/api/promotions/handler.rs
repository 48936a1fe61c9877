//! Promotion API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use shared::ApiResponse;

use crate::core::ServerState;
use crate::db::models::Employee;
use crate::scoring::calculator;
use crate::utils::{AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct CandidatesQuery {
    /// How many candidates to return; the dashboard conventionally asks for 3
    pub limit: Option<usize>,
}

/// One promotion-ranked employee
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionCandidate {
    #[serde(flatten)]
    pub employee: Employee,
    /// Derived 0.6/0.4 blend of performance and personality
    pub promotion_score: f64,
    /// Whether the candidate clears the promotion threshold
    pub eligible: bool,
}

/// Employees ordered by promotion score, best first
pub async fn candidates(
    State(state): State<ServerState>,
    Query(query): Query<CandidatesQuery>,
) -> AppResult<Json<ApiResponse<Vec<PromotionCandidate>>>> {
    let candidates = state
        .engine()
        .promotion_candidates(query.limit)
        .into_iter()
        .map(|employee| PromotionCandidate {
            promotion_score: calculator::promotion_score(&employee),
            eligible: calculator::is_promotion_candidate(&employee),
            employee,
        })
        .collect();

    Ok(ok(candidates))
}
