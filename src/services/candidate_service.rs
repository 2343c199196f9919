use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::database::store::{InviteClaim, Store};
use crate::dto::candidate_dto::{CandidateResponse, CreateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::services::notification_service::InviteSender;
use crate::services::toast_service::ToastQueue;

#[derive(Clone)]
pub struct CandidateService {
    store: Store,
    toasts: ToastQueue,
    invites: Arc<dyn InviteSender>,
}

impl CandidateService {
    pub fn new(store: Store, toasts: ToastQueue, invites: Arc<dyn InviteSender>) -> Self {
        Self {
            store,
            toasts,
            invites,
        }
    }

    pub fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let payload = payload.normalized();
        payload.validate()?;

        let candidate = self.store.add_candidate(Candidate::new(
            payload.name,
            payload.email,
            payload.resume_content,
        ));
        tracing::info!(candidate_id = %candidate.id, "Candidate added to pipeline");
        self.toasts.success("Candidate added to pipeline.");
        Ok(candidate)
    }

    pub fn list(&self) -> Vec<Candidate> {
        self.store.candidates()
    }

    pub fn get(&self, id: Uuid) -> Result<Candidate> {
        self.store
            .candidate(id)
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))
    }

    pub fn to_response(&self, candidate: Candidate) -> CandidateResponse {
        let screening = self.store.screening_state(candidate.id);
        CandidateResponse::new(candidate, screening)
    }

    /// Sends an interview invite and moves a scored candidate to contacted.
    /// Already-contacted candidates are returned unchanged; a concurrent
    /// attempt while delivery is running is a conflict.
    pub async fn send_invite(&self, id: Uuid) -> Result<Candidate> {
        let candidate = match self.store.claim_invite(id)? {
            InviteClaim::AlreadySent(candidate) => return Ok(candidate),
            InviteClaim::Claimed(candidate) => candidate,
        };
        let _lease = InviteLease {
            store: &self.store,
            id,
        };

        if let Err(e) = self.invites.send_invite(&candidate).await {
            tracing::error!(candidate_id = %id, error = %e, "Interview invite failed");
            self.toasts
                .error(format!("Could not send interview invite to {}.", candidate.name));
            return Err(e);
        }

        let contacted = self.store.modify_candidate(id, Candidate::mark_contacted)?;
        tracing::info!(candidate_id = %id, "Candidate contacted");
        self.toasts
            .success(format!("Interview invitation sent to {}.", contacted.name));
        Ok(contacted)
    }

    pub fn reject(&self, id: Uuid) -> Result<Candidate> {
        let rejected = self
            .store
            .modify_candidate_unless_inviting(id, Candidate::mark_rejected)?;
        tracing::info!(candidate_id = %id, "Candidate rejected");
        Ok(rejected)
    }
}

/// Releases the invite claim however delivery ends, including when the
/// request future is dropped.
struct InviteLease<'a> {
    store: &'a Store,
    id: Uuid,
}

impl Drop for InviteLease<'_> {
    fn drop(&mut self) {
        self.store.release_invite(self.id);
    }
}
