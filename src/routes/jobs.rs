use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::job_dto::{CreateJobPayload, JobListResponse, SelectJobPayload},
    error::{Error, Result},
    models::job::JobDescription,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "Jobs, most recent first", body = JobListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.job_service.list();
    Ok(Json(JobListResponse {
        total: items.len(),
        items,
        active_job_id: state.store.active_job_id(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created", body = JobDescription),
        (status = 400, description = "Title or content missing")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.create(payload)?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = JobDescription),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.job_service.get(id)?))
}

#[utoipa::path(
    get,
    path = "/api/jobs/active",
    responses(
        (status = 200, description = "Job used for screening", body = JobDescription),
        (status = 404, description = "No job selected")
    )
)]
#[axum::debug_handler]
pub async fn get_active_job(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let job = state
        .job_service
        .active()
        .ok_or_else(|| Error::NotFound("No active job".to_string()))?;
    Ok(Json(job))
}

#[utoipa::path(
    put,
    path = "/api/jobs/active",
    request_body = SelectJobPayload,
    responses(
        (status = 200, description = "Active job changed", body = JobDescription),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn select_active_job(
    State(state): State<AppState>,
    Json(payload): Json<SelectJobPayload>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.job_service.select(payload.job_id)?))
}
