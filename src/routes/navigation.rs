use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::navigation_dto::{NavigatePayload, NavigationResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Current view and selection", body = NavigationResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_navigation(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(NavigationResponse::from(state.navigator.snapshot())))
}

#[utoipa::path(
    post,
    path = "/api/navigation/navigate",
    request_body = NavigatePayload,
    responses(
        (status = 200, description = "View changed", body = NavigationResponse),
        (status = 400, description = "View cannot be entered from the sidebar")
    )
)]
#[axum::debug_handler]
pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigatePayload>,
) -> Result<impl IntoResponse> {
    let next = state.navigator.update(|nav| nav.navigate(payload.view))?;
    Ok(Json(NavigationResponse::from(next)))
}

#[utoipa::path(
    post,
    path = "/api/navigation/analysis/{candidate_id}",
    params(
        ("candidate_id" = Uuid, Path, description = "Candidate whose report to open")
    ),
    responses(
        (status = 200, description = "Report opened", body = NavigationResponse),
        (status = 404, description = "Candidate not found"),
        (status = 409, description = "Not on the candidates view or candidate not screened")
    )
)]
#[axum::debug_handler]
pub async fn open_analysis(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(candidate_id)?;
    let next = state.navigator.update(|nav| nav.open_analysis(&candidate))?;
    Ok(Json(NavigationResponse::from(next)))
}

#[utoipa::path(
    post,
    path = "/api/navigation/back",
    responses(
        (status = 200, description = "Back on the pipeline", body = NavigationResponse)
    )
)]
#[axum::debug_handler]
pub async fn back(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let next = state.navigator.update(|nav| {
        nav.back();
        Ok(())
    })?;
    Ok(Json(NavigationResponse::from(next)))
}
