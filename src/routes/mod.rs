pub mod candidates;
pub mod health;
pub mod jobs;
pub mod navigation;
pub mod toasts;
pub mod views;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::middleware::cors::cors_layer;
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        jobs::list_jobs,
        jobs::create_job,
        jobs::get_job,
        jobs::get_active_job,
        jobs::select_active_job,
        candidates::list_candidates,
        candidates::create_candidate,
        candidates::get_candidate,
        candidates::screen_candidate,
        candidates::get_screening,
        candidates::send_invite,
        candidates::reject_candidate,
        navigation::get_navigation,
        navigation::navigate,
        navigation::open_analysis,
        navigation::back,
        views::current_view,
        views::dashboard,
        views::jobs,
        views::candidates,
        views::analysis,
        toasts::list_toasts,
        toasts::dismiss_toast,
    ),
    components(schemas(
        crate::models::job::JobDescription,
        crate::models::analysis::MatchAnalysis,
        crate::models::analysis::MatchBand,
        crate::models::candidate::CandidateStatus,
        crate::models::screening::ScreeningState,
        crate::models::toast::Toast,
        crate::models::toast::ToastKind,
        crate::models::view::View,
        crate::dto::job_dto::CreateJobPayload,
        crate::dto::job_dto::SelectJobPayload,
        crate::dto::job_dto::JobListResponse,
        crate::dto::candidate_dto::CreateCandidatePayload,
        crate::dto::candidate_dto::CandidateResponse,
        crate::dto::candidate_dto::CandidateListResponse,
        crate::dto::candidate_dto::ScreeningResponse,
        crate::dto::navigation_dto::NavigatePayload,
        crate::dto::navigation_dto::NavigationResponse,
        crate::dto::view_dto::DashboardStats,
        crate::dto::view_dto::DashboardView,
        crate::dto::view_dto::TopMatch,
        crate::dto::view_dto::JobsView,
        crate::dto::view_dto::JobOption,
        crate::dto::view_dto::RowAction,
        crate::dto::view_dto::CandidateRow,
        crate::dto::view_dto::CandidatesView,
        crate::dto::view_dto::AnalysisReport,
    )),
    tags((name = "hirepulse", description = "Recruitment pipeline with AI resume screening"))
)]
pub struct ApiDoc;

pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Router {
    let job_api = Router::new()
        .route("/api/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/api/jobs/active",
            get(jobs::get_active_job).put(jobs::select_active_job),
        )
        .route("/api/jobs/:id", get(jobs::get_job));

    let candidate_api = Router::new()
        .route(
            "/api/candidates",
            get(candidates::list_candidates).post(candidates::create_candidate),
        )
        .route("/api/candidates/:id", get(candidates::get_candidate))
        .route(
            "/api/candidates/:id/screen",
            post(candidates::screen_candidate),
        )
        .route(
            "/api/candidates/:id/screening",
            get(candidates::get_screening),
        )
        .route("/api/candidates/:id/invite", post(candidates::send_invite))
        .route(
            "/api/candidates/:id/reject",
            post(candidates::reject_candidate),
        );

    let ui_api = Router::new()
        .route("/api/navigation", get(navigation::get_navigation))
        .route("/api/navigation/navigate", post(navigation::navigate))
        .route(
            "/api/navigation/analysis/:candidate_id",
            post(navigation::open_analysis),
        )
        .route("/api/navigation/back", post(navigation::back))
        .route("/api/view", get(views::current_view))
        .route("/api/views/dashboard", get(views::dashboard))
        .route("/api/views/jobs", get(views::jobs))
        .route("/api/views/candidates", get(views::candidates))
        .route("/api/views/analysis", get(views::analysis))
        .route("/api/toasts", get(toasts::list_toasts))
        .route("/api/toasts/:id", delete(toasts::dismiss_toast));

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(job_api)
        .merge(candidate_api)
        .merge(ui_api)
        .with_state(state)
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
}
