//! # API Endpoint Handlers

use super::{
    AppState,
    error::ApiError,
    types::{
        HealthResponse, LoginRequest, LoginResponse, MessageResponse, ReadinessResponse,
        SearchQuery, UploadResponse,
    },
};
use accreditrack_core::{Criterion, DocumentId, DocumentRecord, NewDocument, issue_session};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// LOGIN HANDLER
// =============================================================================

/// Issue a display session. No credentials are checked.
pub async fn login_handler(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    let user = issue_session(request.email.as_deref(), request.role.as_deref())?;
    tracing::info!(email = %user.email, role = %user.role, "Session issued");
    Ok(Json(LoginResponse::success(user)))
}

// =============================================================================
// CRITERIA HANDLER
// =============================================================================

/// The checklist catalog, in order.
pub async fn criteria_handler(State(state): State<AppState>) -> Json<Vec<Criterion>> {
    Json(state.checklist.list_criteria().to_vec())
}

// =============================================================================
// DOCUMENT HANDLERS
// =============================================================================

/// List records newest first, optionally filtered by `?search=`.
pub async fn list_documents_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<DocumentRecord>>, ApiError> {
    let registry = state.registry.read().await;
    let records = match query.search.as_deref() {
        Some(term) if !term.is_empty() => registry.search(term)?,
        _ => registry.list_all()?,
    };
    Ok(Json(records))
}

/// Create a record and return it with 201.
pub async fn upload_document_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewDocument>, JsonRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let Json(fields) = payload?;
    let mut registry = state.registry.write().await;
    let document = registry.create(fields)?;
    tracing::info!(
        id = %document.id,
        criterion = %document.criterion_code,
        item = %document.checklist_title,
        "Document uploaded"
    );
    Ok((StatusCode::CREATED, Json(UploadResponse::uploaded(document))))
}

/// Delete a record by id; 404 when it does not exist.
pub async fn delete_document_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = DocumentId::new(id);
    let mut registry = state.registry.write().await;
    registry.delete_by_id(&id)?;
    tracing::info!(id = %id, "Document deleted");
    Ok(Json(MessageResponse::new("Document deleted successfully")))
}

// =============================================================================
// READINESS HANDLER
// =============================================================================

/// Score the current records against the checklist.
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, ApiError> {
    let registry = state.registry.read().await;
    let report = registry.readiness(&state.checklist)?;
    Ok(Json(report.into()))
}
