//! Department API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;

use crate::core::ServerState;
use crate::db::models::{Department, DepartmentCreate, DepartmentUpdate};
use crate::db::repository::DepartmentRepository;
use crate::utils::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ok};

/// List all departments
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Department>>>> {
    let repo = DepartmentRepository::new(state.store());
    Ok(ok(repo.find_all()))
}

/// Get department by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Department>>> {
    let repo = DepartmentRepository::new(state.store());
    let department = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Department {}", id)))?;
    Ok(ok(department))
}

/// Create a new department
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<ApiResponse<Department>>> {
    validate_required_text(&payload.name, "name", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = DepartmentRepository::new(state.store());
    let department = repo.create(payload)?;
    Ok(ok(department))
}

/// Update a department
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<ApiResponse<Department>>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(ref description) = payload.description {
        validate_required_text(description, "description", MAX_NOTE_LEN)?;
    }

    let repo = DepartmentRepository::new(state.store());
    let department = repo.update(id, payload)?;
    Ok(ok(department))
}

/// Delete a department (rejected while employees still reference it)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = DepartmentRepository::new(state.store());
    repo.delete(id)?;
    Ok(ok(true))
}
