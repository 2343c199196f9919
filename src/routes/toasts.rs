use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::toast::Toast,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/toasts",
    responses(
        (status = 200, description = "Notifications that have not expired, oldest first", body = [Toast])
    )
)]
#[axum::debug_handler]
pub async fn list_toasts(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.toasts.active()))
}

#[utoipa::path(
    delete,
    path = "/api/toasts/{id}",
    params(
        ("id" = Uuid, Path, description = "Toast ID")
    ),
    responses(
        (status = 204, description = "Toast dismissed"),
        (status = 404, description = "Toast not found or already expired")
    )
)]
#[axum::debug_handler]
pub async fn dismiss_toast(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    if !state.toasts.dismiss(id) {
        return Err(Error::NotFound(format!("Toast {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
