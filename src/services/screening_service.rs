use uuid::Uuid;

use crate::database::store::Store;
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::screening::ScreeningState;
use crate::services::scoring_service::ScoringService;
use crate::services::toast_service::ToastQueue;
use crate::utils::time::now;

/// Everything the scoring call needs, captured when the screening starts so
/// later edits to the job list do not change what gets scored.
#[derive(Debug, Clone)]
pub struct ScreeningTicket {
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub resume_content: String,
    pub job_id: Uuid,
    pub job_content: String,
}

#[derive(Clone)]
pub struct ScreeningService {
    store: Store,
    scoring: ScoringService,
    toasts: ToastQueue,
}

impl ScreeningService {
    pub fn new(store: Store, scoring: ScoringService, toasts: ToastQueue) -> Self {
        Self {
            store,
            scoring,
            toasts,
        }
    }

    pub fn state(&self, candidate_id: Uuid) -> Result<ScreeningState> {
        if self.store.candidate(candidate_id).is_none() {
            return Err(Error::NotFound(format!(
                "Candidate {} not found",
                candidate_id
            )));
        }
        Ok(self.store.screening_state(candidate_id))
    }

    /// Checks the candidate can be screened and marks the screening in flight.
    pub fn start(&self, candidate_id: Uuid, job_id: Option<Uuid>) -> Result<ScreeningTicket> {
        let candidate = self
            .store
            .candidate(candidate_id)
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", candidate_id)))?;
        if candidate.status() != CandidateStatus::Pending {
            return Err(Error::Conflict(format!(
                "Candidate {} is already {}",
                candidate_id,
                candidate.status()
            )));
        }

        let job_id = job_id
            .or_else(|| self.store.active_job_id())
            .ok_or_else(|| Error::BadRequest("no active job".to_string()))?;
        let job = self
            .store
            .job(job_id)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", job_id)))?;

        if !self.store.begin_screening(candidate_id) {
            return Err(Error::Conflict(format!(
                "Screening for candidate {} is already in flight",
                candidate_id
            )));
        }

        tracing::info!(
            candidate_id = %candidate_id,
            job_id = %job.id,
            model = %self.scoring.model(),
            "Screening started"
        );
        Ok(ScreeningTicket {
            candidate_id,
            candidate_name: candidate.name,
            resume_content: candidate.resume_content,
            job_id: job.id,
            job_content: job.content,
        })
    }

    pub async fn complete(&self, ticket: ScreeningTicket) -> Result<Candidate> {
        let result = self
            .scoring
            .screen_candidate(&ticket.job_content, &ticket.resume_content)
            .await;

        let analysis = match result {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::error!(
                    candidate_id = %ticket.candidate_id,
                    error = %e,
                    "Screening failed"
                );
                self.store.finish_screening(
                    ticket.candidate_id,
                    ScreeningState::Failed {
                        error: e.to_string(),
                        finished_at: now(),
                    },
                );
                self.toasts.error("AI Screening failed. Check API key.");
                return Err(e.into());
            }
        };

        let score = analysis.match_percentage;
        let scored = match self
            .store
            .modify_candidate(ticket.candidate_id, |c| c.mark_scored(analysis))
        {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::warn!(
                    candidate_id = %ticket.candidate_id,
                    error = %e,
                    "Discarding screening result"
                );
                self.store.finish_screening(
                    ticket.candidate_id,
                    ScreeningState::Failed {
                        error: e.to_string(),
                        finished_at: now(),
                    },
                );
                return Err(e);
            }
        };

        self.store.finish_screening(
            ticket.candidate_id,
            ScreeningState::Succeeded {
                score,
                finished_at: now(),
            },
        );
        tracing::info!(candidate_id = %scored.id, score, "Candidate scored");
        self.toasts
            .success(format!("{} screened successfully!", ticket.candidate_name));
        Ok(scored)
    }

    pub async fn screen(&self, candidate_id: Uuid, job_id: Option<Uuid>) -> Result<Candidate> {
        let ticket = self.start(candidate_id, job_id)?;
        self.complete(ticket).await
    }
}
