//! Document API Handlers
//!
//! Metadata only - no file bytes travel through these endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use shared::ApiResponse;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Document, DocumentCreate, DocumentReview};
use crate::db::repository::DocumentRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ok};

/// List all documents, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Document>>>> {
    let repo = DocumentRepository::new(state.store());
    Ok(ok(repo.find_all()))
}

/// Get document by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let repo = DocumentRepository::new(state.store());
    let document = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Document {}", id)))?;
    Ok(ok(document))
}

/// List documents attached to one employee
pub async fn list_by_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<u64>,
) -> AppResult<Json<ApiResponse<Vec<Document>>>> {
    let repo = DocumentRepository::new(state.store());
    Ok(ok(repo.find_by_employee(employee_id)))
}

/// Upload document metadata as the authenticated employee
pub async fn upload(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<DocumentCreate>,
) -> AppResult<Json<ApiResponse<Document>>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_required_text(&payload.file_name, "fileName", MAX_NAME_LEN)?;
    validate_required_text(&payload.file_type, "fileType", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;

    let repo = DocumentRepository::new(state.store());
    let document = repo.create(payload, user.id, Utc::now().date_naive())?;

    tracing::info!(
        document_id = document.id,
        uploaded_by = user.id,
        "Document uploaded"
    );
    Ok(ok(document))
}

/// Apply a review action to a document
pub async fn review(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<u64>,
    Json(payload): Json<DocumentReview>,
) -> AppResult<Json<ApiResponse<Document>>> {
    validate_optional_text(&payload.comments, "comments", MAX_NOTE_LEN)?;

    let repo = DocumentRepository::new(state.store());
    let document = repo.review(id, payload)?;

    tracing::info!(
        document_id = id,
        reviewer = user.id,
        status = %document.status,
        "Document reviewed"
    );
    Ok(ok(document))
}
