use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::candidate_dto::CandidateResponse;
use crate::models::analysis::{MatchAnalysis, MatchBand};
use crate::models::job::JobDescription;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_jobs: usize,
    pub total_applicants: usize,
    /// Candidates scoring 80 or more.
    pub high_match: usize,
    pub awaiting_action: usize,
    pub contacted: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopMatch {
    pub id: Uuid,
    pub name: String,
    pub score: u8,
    pub band: MatchBand,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub recent_jobs: Vec<JobDescription>,
    pub top_matches: Vec<TopMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobsView {
    pub jobs: Vec<JobDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobOption {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RowAction {
    RunScreen,
    ViewReport,
    /// Rejected before screening: nothing to run or open.
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    pub candidate: CandidateResponse,
    pub action: RowAction,
    /// True while a screening is running for this row.
    pub busy: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidatesView {
    pub active_job: Option<JobDescription>,
    pub jobs: Vec<JobOption>,
    pub candidates: Vec<CandidateRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub candidate: CandidateResponse,
    pub analysis: MatchAnalysis,
    pub band: MatchBand,
    pub invite_sent: bool,
}

/// Whatever the current view renders to. `Blank` is what the analysis screen
/// shows when there is no scored candidate to report on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    Dashboard(DashboardView),
    Jobs(JobsView),
    Candidates(CandidatesView),
    Analysis(AnalysisReport),
    Blank,
}
