//! Evaluation API Handlers
//!
//! Submission recomputes the target employee's composite scores
//! immediately; approval and rejection are the leadership sign-off on top
//! and never change scores.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Evaluation, EvaluationSubmit};
use crate::db::repository::EvaluationRepository;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ok};

/// List all evaluations
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Evaluation>>>> {
    let repo = EvaluationRepository::new(state.store());
    Ok(ok(repo.find_all()))
}

/// Get evaluation by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Evaluation>>> {
    let repo = EvaluationRepository::new(state.store());
    let evaluation = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Evaluation {}", id)))?;
    Ok(ok(evaluation))
}

/// List evaluations for one employee, newest first
pub async fn list_by_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<u64>,
) -> AppResult<Json<ApiResponse<Vec<Evaluation>>>> {
    let repo = EvaluationRepository::new(state.store());
    Ok(ok(repo.find_by_employee(employee_id)))
}

/// Submit an evaluation as the authenticated manager
pub async fn submit(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<EvaluationSubmit>,
) -> AppResult<Json<ApiResponse<Evaluation>>> {
    validate_optional_text(&payload.overall_comment, "overallComment", MAX_NOTE_LEN)?;

    let evaluation = state.engine().submit_evaluation(
        payload.employee_id,
        user.id,
        payload.criteria_scores,
        payload.overall_comment,
    )?;
    Ok(ok(evaluation))
}

/// Leadership review queue: all pending evaluations
pub async fn list_pending(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Evaluation>>>> {
    Ok(ok(state.engine().pending_approvals()))
}

/// Approve a pending evaluation
pub async fn approve(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Evaluation>>> {
    let evaluation = state.engine().approve_evaluation(id, user.id)?;
    Ok(ok(evaluation))
}

/// Reject a pending evaluation
pub async fn reject(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Evaluation>>> {
    let evaluation = state.engine().reject_evaluation(id, user.id)?;
    Ok(ok(evaluation))
}
