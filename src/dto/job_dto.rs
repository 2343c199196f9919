use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::job::JobDescription;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(length(min = 1, message = "Job title cannot be empty"))]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1, message = "Job description cannot be empty"))]
    pub content: String,
}

impl CreateJobPayload {
    /// Trims every field so whitespace-only input fails validation.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectJobPayload {
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub items: Vec<JobDescription>,
    pub total: usize,
    pub active_job_id: Option<Uuid>,
}
