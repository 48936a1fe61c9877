//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SCORE, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ok};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let repo = EmployeeRepository::new(state.store());
    Ok(ok(repo.find_all()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let repo = EmployeeRepository::new(state.store());
    let employee = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Employee {}", id)))?;
    Ok(ok(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.position, "position", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.department, "department", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.avatar, "avatar", MAX_URL_LEN)?;
    for (field, value) in [
        ("performance", payload.performance),
        ("personality", payload.personality),
    ] {
        if let Some(score) = value
            && score > MAX_SCORE
        {
            return Err(AppError::validation(format!(
                "{field} must be between 0 and {MAX_SCORE} (got {score})"
            )));
        }
    }

    let repo = EmployeeRepository::new(state.store());
    let employee = repo.create(payload)?;

    tracing::info!(employee_id = employee.id, name = %employee.name, "Employee created");
    Ok(ok(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref position) = payload.position {
        validate_required_text(position, "position", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(ref department) = payload.department {
        validate_required_text(department, "department", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&payload.avatar, "avatar", MAX_URL_LEN)?;

    let repo = EmployeeRepository::new(state.store());
    let employee = repo.update(id, payload)?;
    Ok(ok(employee))
}

/// Delete an employee (cascades to that employee's evaluations)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = EmployeeRepository::new(state.store());
    repo.delete(id)?;

    tracing::info!(employee_id = id, "Employee deleted");
    Ok(ok(true))
}
