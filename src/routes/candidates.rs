use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::{
    dto::candidate_dto::{
        CandidateListResponse, CandidateResponse, CreateCandidatePayload, ScreenQuery,
        ScreeningResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    responses(
        (status = 200, description = "Candidates, most recent first", body = CandidateListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items: Vec<CandidateResponse> = state
        .candidate_service
        .list()
        .into_iter()
        .map(|c| state.candidate_service.to_response(c))
        .collect();
    Ok(Json(CandidateListResponse {
        total: items.len(),
        items,
    }))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 201, description = "Candidate added as pending", body = CandidateResponse),
        (status = 400, description = "Name or resume missing, or invalid email")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.create(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(state.candidate_service.to_response(candidate)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate found", body = CandidateResponse),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(id)?;
    Ok(Json(state.candidate_service.to_response(candidate)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/screen",
    params(
        ("id" = Uuid, Path, description = "Candidate ID"),
        ("jobId" = Option<Uuid>, Query, description = "Job to score against; defaults to the active job"),
        ("wait" = Option<bool>, Query, description = "Wait for the model before answering")
    ),
    responses(
        (status = 202, description = "Screening started", body = ScreeningResponse),
        (status = 200, description = "Candidate scored", body = CandidateResponse),
        (status = 400, description = "No active job"),
        (status = 404, description = "Candidate or job not found"),
        (status = 409, description = "Candidate already screened or screening in flight"),
        (status = 502, description = "Scoring service failed")
    )
)]
#[axum::debug_handler]
pub async fn screen_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ScreenQuery>,
) -> Result<Response> {
    let ticket = state.screening_service.start(id, query.job_id)?;

    if query.wait.unwrap_or(false) {
        let candidate = state.screening_service.complete(ticket).await?;
        return Ok(Json(state.candidate_service.to_response(candidate)).into_response());
    }

    let service = state.screening_service.clone();
    tokio::spawn(async move {
        if let Err(e) = service.complete(ticket).await {
            tracing::debug!(candidate_id = %id, error = %e, "Background screening ended with error");
        }
    });

    let body = ScreeningResponse {
        candidate_id: id,
        screening: state.store.screening_state(id),
    };
    Ok((StatusCode::ACCEPTED, Json(body)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}/screening",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Screening state", body = ScreeningResponse),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_screening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let screening = state.screening_service.state(id)?;
    Ok(Json(ScreeningResponse {
        candidate_id: id,
        screening,
    }))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/invite",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate contacted", body = CandidateResponse),
        (status = 404, description = "Candidate not found"),
        (status = 409, description = "Candidate has not been scored"),
        (status = 502, description = "Invite delivery failed")
    )
)]
#[axum::debug_handler]
pub async fn send_invite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.send_invite(id).await?;
    Ok(Json(state.candidate_service.to_response(candidate)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate rejected", body = CandidateResponse),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn reject_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.reject(id)?;
    Ok(Json(state.candidate_service.to_response(candidate)))
}
