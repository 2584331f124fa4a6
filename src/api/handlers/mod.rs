use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::export::ExportFormat;
use crate::models::*;
use crate::store::{Action, Edit, ProgressReport, SharedStore, StoreError};

// ============================================================
// Error Handling
// ============================================================

/// Caller mistakes (malformed patch, index past the end of a list) are
/// reported back verbatim as 400s.
fn bad_request(e: impl std::fmt::Display) -> (StatusCode, String) {
    let msg = e.to_string();
    tracing::warn!("Rejected request: {}", msg);
    (StatusCode::BAD_REQUEST, msg)
}

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Document
// ============================================================

pub async fn get_strategy(State(store): State<SharedStore>) -> Json<StrategyDocument> {
    Json(store.read(|s| s.document().clone()))
}

pub async fn patch_strategy(
    State(store): State<SharedStore>,
    Json(patch): Json<DocumentPatch>,
) -> Json<StrategyDocument> {
    Json(store.update(|s| {
        s.patch_document(patch);
        s.document().clone()
    }))
}

// ============================================================
// Sections
// ============================================================

pub async fn list_sections(State(store): State<SharedStore>) -> Json<Vec<SectionSummary>> {
    Json(store.read(|s| s.sections()))
}

pub async fn get_section(
    State(store): State<SharedStore>,
    Path(id): Path<SectionId>,
) -> Json<SectionView> {
    Json(store.read(|s| s.section_view(id)))
}

/// Shallow-merge the body into one section. The body is the section's own
/// partial record, or the full row list for `action_plan`.
pub async fn patch_section(
    State(store): State<SharedStore>,
    Path(id): Path<SectionId>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SectionView>, (StatusCode, String)> {
    store
        .update(|s| -> Result<SectionView, StoreError> {
            s.patch_section_json(id, body)?;
            Ok(s.section_view(id))
        })
        .map(Json)
        .map_err(bad_request)
}

pub async fn apply_edit(
    State(store): State<SharedStore>,
    Json(edit): Json<Edit>,
) -> Result<Json<SectionView>, (StatusCode, String)> {
    store
        .update(|s| -> Result<SectionView, StoreError> {
            let section = s.apply_edit(edit)?;
            Ok(s.section_view(section))
        })
        .map(Json)
        .map_err(bad_request)
}

// ============================================================
// Navigation
// ============================================================

pub async fn get_navigation(State(store): State<SharedStore>) -> Json<NavigationState> {
    Json(store.read(|s| s.navigation()))
}

pub async fn set_navigation(
    State(store): State<SharedStore>,
    Json(input): Json<SetSectionInput>,
) -> Json<NavigationState> {
    Json(store.update(|s| {
        s.set_current_section(input.section);
        s.navigation()
    }))
}

pub async fn next_section(State(store): State<SharedStore>) -> Json<NavigationState> {
    Json(store.update(|s| {
        let next = s.current_section().next();
        s.dispatch(Action::SetCurrentSection(next));
        s.navigation()
    }))
}

pub async fn previous_section(State(store): State<SharedStore>) -> Json<NavigationState> {
    Json(store.update(|s| {
        let previous = s.current_section().previous();
        s.dispatch(Action::SetCurrentSection(previous));
        s.navigation()
    }))
}

// ============================================================
// Progress & Export
// ============================================================

pub async fn get_progress(State(store): State<SharedStore>) -> Json<ProgressReport> {
    Json(store.read(|s| s.progress_report()))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<ExportFormat>,
}

pub async fn export_document(
    State(store): State<SharedStore>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let format = query.format.unwrap_or_default();
    let document = store.read(|s| s.document().clone());
    let body = format.render(&document).map_err(internal_error)?;

    let content_type = match format {
        ExportFormat::Print => "text/markdown; charset=utf-8",
        ExportFormat::Json => "application/json",
    };
    Ok(([(header::CONTENT_TYPE, content_type)], body))
}
