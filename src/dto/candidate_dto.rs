use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::analysis::{MatchAnalysis, MatchBand};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::screening::ScreeningState;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1, message = "Candidate name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Resume content cannot be empty"))]
    pub resume_content: String,
}

impl CreateCandidatePayload {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            resume_content: self.resume_content.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenQuery {
    /// Defaults to the active job.
    pub job_id: Option<Uuid>,
    /// Wait for the model instead of answering 202 straight away.
    pub wait: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub resume_content: String,
    pub status: CandidateStatus,
    pub score: Option<u8>,
    pub match_analysis: Option<MatchAnalysis>,
    pub band: Option<MatchBand>,
    pub created_at: i64,
    pub screening: ScreeningState,
}

impl CandidateResponse {
    pub fn new(candidate: Candidate, screening: ScreeningState) -> Self {
        let status = candidate.status();
        let score = candidate.score();
        let match_analysis = candidate.analysis().cloned();
        Self {
            id: candidate.id,
            name: candidate.name,
            email: candidate.email,
            resume_content: candidate.resume_content,
            status,
            score,
            band: score.map(MatchBand::from_score),
            match_analysis,
            created_at: candidate.created_at,
            screening,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListResponse {
    pub items: Vec<CandidateResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResponse {
    pub candidate_id: Uuid,
    pub screening: ScreeningState,
}
