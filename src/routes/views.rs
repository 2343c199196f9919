use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::{
    dto::view_dto::{AnalysisReport, CandidatesView, DashboardView, JobsView},
    error::Result,
    services::view_service,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/view",
    responses(
        (status = 200, description = "Current screen as {view, data}; BLANK carries no data")
    )
)]
#[axum::debug_handler]
pub async fn current_view(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let nav = state.navigator.snapshot();
    Ok(Json(view_service::render(&state.store, nav)))
}

#[utoipa::path(
    get,
    path = "/api/views/dashboard",
    responses(
        (status = 200, description = "Dashboard stats, recent jobs and top matches", body = DashboardView)
    )
)]
#[axum::debug_handler]
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(view_service::dashboard(&state.store)))
}

#[utoipa::path(
    get,
    path = "/api/views/jobs",
    responses(
        (status = 200, description = "Job board", body = JobsView)
    )
)]
#[axum::debug_handler]
pub async fn jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(view_service::jobs(&state.store)))
}

#[utoipa::path(
    get,
    path = "/api/views/candidates",
    responses(
        (status = 200, description = "Candidate pipeline", body = CandidatesView)
    )
)]
#[axum::debug_handler]
pub async fn candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(view_service::candidates(&state.store)))
}

#[utoipa::path(
    get,
    path = "/api/views/analysis",
    responses(
        (status = 200, description = "Report for the selected candidate", body = AnalysisReport),
        (status = 204, description = "No scored candidate selected")
    )
)]
#[axum::debug_handler]
pub async fn analysis(State(state): State<AppState>) -> Result<Response> {
    let nav = state.navigator.snapshot();
    match view_service::analysis(&state.store, nav) {
        Some(report) => Ok(Json(report).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
