use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::analysis::MatchAnalysis;
use crate::utils::time::now_millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Pending,
    Scored,
    Contacted,
    Rejected,
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Scored => "scored",
            CandidateStatus::Contacted => "contacted",
            CandidateStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Pipeline position of a candidate. The analysis travels with the stage,
/// so a score can never exist without the report that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Pending,
    Scored { analysis: MatchAnalysis },
    Contacted { analysis: MatchAnalysis },
    Rejected { analysis: Option<MatchAnalysis> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub resume_content: String,
    pub stage: Stage,
    pub created_at: i64,
}

impl Candidate {
    pub fn new(name: String, email: Option<String>, resume_content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            resume_content,
            stage: Stage::Pending,
            created_at: now_millis(),
        }
    }

    pub fn status(&self) -> CandidateStatus {
        match self.stage {
            Stage::Pending => CandidateStatus::Pending,
            Stage::Scored { .. } => CandidateStatus::Scored,
            Stage::Contacted { .. } => CandidateStatus::Contacted,
            Stage::Rejected { .. } => CandidateStatus::Rejected,
        }
    }

    pub fn analysis(&self) -> Option<&MatchAnalysis> {
        match &self.stage {
            Stage::Pending => None,
            Stage::Scored { analysis } | Stage::Contacted { analysis } => Some(analysis),
            Stage::Rejected { analysis } => analysis.as_ref(),
        }
    }

    pub fn score(&self) -> Option<u8> {
        self.analysis().map(|a| a.match_percentage)
    }

    pub fn mark_scored(mut self, analysis: MatchAnalysis) -> Result<Self> {
        match self.stage {
            Stage::Pending => {
                self.stage = Stage::Scored { analysis };
                Ok(self)
            }
            _ => Err(self.illegal("scored")),
        }
    }

    /// Sending a second invite is a no-op.
    pub fn mark_contacted(mut self) -> Result<Self> {
        match self.stage {
            Stage::Scored { analysis } => {
                self.stage = Stage::Contacted { analysis };
                Ok(self)
            }
            Stage::Contacted { .. } => Ok(self),
            _ => Err(self.illegal("contacted")),
        }
    }

    pub fn mark_rejected(mut self) -> Result<Self> {
        self.stage = match self.stage {
            Stage::Pending => Stage::Rejected { analysis: None },
            Stage::Scored { analysis } | Stage::Contacted { analysis } => Stage::Rejected {
                analysis: Some(analysis),
            },
            rejected @ Stage::Rejected { .. } => rejected,
        };
        Ok(self)
    }

    fn illegal(&self, target: &str) -> Error {
        Error::Conflict(format!(
            "Candidate {} is {} and cannot become {}",
            self.id,
            self.status(),
            target
        ))
    }
}
