//! Policy API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;

use crate::core::ServerState;
use crate::db::models::Policy;
use crate::db::repository::PolicyRepository;
use crate::utils::{AppError, AppResult, ok};

/// List all policies
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Policy>>>> {
    let repo = PolicyRepository::new(state.store());
    Ok(ok(repo.find_all()))
}

/// Get policy by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Policy>>> {
    let repo = PolicyRepository::new(state.store());
    let policy = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Policy {}", id)))?;
    Ok(ok(policy))
}
