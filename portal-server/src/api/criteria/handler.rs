//! Evaluation Criteria API Handlers
//!
//! The weight-cap invariant (per-category sum <= 100) is enforced by the
//! repository; these handlers only do surface validation.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::{ApiResponse, EvaluationCategory};

use crate::core::ServerState;
use crate::db::models::{CriterionCreate, CriterionUpdate, EvaluationCriterion};
use crate::db::repository::CriteriaRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<EvaluationCategory>,
}

/// List criteria, optionally filtered by category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<EvaluationCriterion>>>> {
    let repo = CriteriaRepository::new(state.store());
    let criteria = match query.category {
        Some(category) => repo.find_by_category(category),
        None => repo.find_all(),
    };
    Ok(ok(criteria))
}

/// Get criterion by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<EvaluationCriterion>>> {
    let repo = CriteriaRepository::new(state.store());
    let criterion = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Criterion {}", id)))?;
    Ok(ok(criterion))
}

/// Create a new criterion
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CriterionCreate>,
) -> AppResult<Json<ApiResponse<EvaluationCriterion>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = CriteriaRepository::new(state.store());
    let criterion = repo.create(payload)?;

    tracing::info!(
        criterion_id = criterion.id,
        category = %criterion.category,
        weight = criterion.weight,
        "Criterion created"
    );
    Ok(ok(criterion))
}

/// Update a criterion
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<CriterionUpdate>,
) -> AppResult<Json<ApiResponse<EvaluationCriterion>>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref description) = payload.description {
        validate_required_text(description, "description", MAX_NOTE_LEN)?;
    }

    let repo = CriteriaRepository::new(state.store());
    let criterion = repo.update(id, payload)?;
    Ok(ok(criterion))
}

/// Delete a criterion
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = CriteriaRepository::new(state.store());
    repo.delete(id)?;
    Ok(ok(true))
}
