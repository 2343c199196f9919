use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::job::JobDescription;
use crate::models::screening::ScreeningState;
use crate::utils::time::now;

#[derive(Debug, Default)]
struct Tables {
    jobs: Vec<JobDescription>,
    candidates: Vec<Candidate>,
    active_job_id: Option<Uuid>,
    screenings: HashMap<Uuid, ScreeningState>,
    invites_in_flight: HashSet<Uuid>,
}

impl Tables {
    fn modify<F>(&mut self, id: Uuid, f: F) -> Result<Candidate>
    where
        F: FnOnce(Candidate) -> Result<Candidate>,
    {
        let slot = self
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
        let updated = f(slot.clone())?;
        *slot = updated.clone();
        Ok(updated)
    }
}

/// Outcome of [`Store::claim_invite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteClaim {
    /// The caller now owns delivery and must call [`Store::release_invite`].
    Claimed(Candidate),
    AlreadySent(Candidate),
}

/// Process-wide, in-memory source of truth for jobs, candidates and the
/// active job selection. Newest records always sit at index 0.
#[derive(Clone, Debug, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo job, which is also selected.
    pub fn seeded() -> Self {
        let store = Self::new();
        let demo = store.add_job(JobDescription::demo());
        store.write().active_job_id = Some(demo.id);
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_job(&self, job: JobDescription) -> JobDescription {
        self.write().jobs.insert(0, job.clone());
        job
    }

    pub fn add_candidate(&self, candidate: Candidate) -> Candidate {
        let mut tables = self.write();
        tables.candidates.insert(0, candidate.clone());
        candidate
    }

    /// Replaces the candidate with the same id in place. Returns `false`
    /// and leaves the list untouched when no candidate matches.
    pub fn update_candidate(&self, updated: Candidate) -> bool {
        let mut tables = self.write();
        match tables.candidates.iter_mut().find(|c| c.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Applies a stage transition to the stored candidate under a single write
    /// lock. The stored record is left as it was when `f` fails.
    pub fn modify_candidate<F>(&self, id: Uuid, f: F) -> Result<Candidate>
    where
        F: FnOnce(Candidate) -> Result<Candidate>,
    {
        self.write().modify(id, f)
    }

    /// Same as [`Store::modify_candidate`], but refuses while an invite is
    /// being delivered to the candidate.
    pub fn modify_candidate_unless_inviting<F>(&self, id: Uuid, f: F) -> Result<Candidate>
    where
        F: FnOnce(Candidate) -> Result<Candidate>,
    {
        let mut tables = self.write();
        if tables.invites_in_flight.contains(&id) {
            return Err(Error::Conflict(format!(
                "An interview invite is being sent to candidate {}",
                id
            )));
        }
        tables.modify(id, f)
    }

    /// Reserves invite delivery for a scored candidate. Only one delivery per
    /// candidate can be claimed at a time.
    pub fn claim_invite(&self, id: Uuid) -> Result<InviteClaim> {
        let mut tables = self.write();
        let candidate = tables
            .candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
        if candidate.status() == CandidateStatus::Contacted {
            return Ok(InviteClaim::AlreadySent(candidate));
        }
        if tables.invites_in_flight.contains(&id) {
            return Err(Error::Conflict(format!(
                "An interview invite is already being sent to candidate {}",
                id
            )));
        }
        candidate.clone().mark_contacted()?;
        tables.invites_in_flight.insert(id);
        Ok(InviteClaim::Claimed(candidate))
    }

    pub fn release_invite(&self, id: Uuid) {
        self.write().invites_in_flight.remove(&id);
    }

    pub fn jobs(&self) -> Vec<JobDescription> {
        self.read().jobs.clone()
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.read().candidates.clone()
    }

    pub fn job(&self, id: Uuid) -> Option<JobDescription> {
        self.read().jobs.iter().find(|j| j.id == id).cloned()
    }

    pub fn candidate(&self, id: Uuid) -> Option<Candidate> {
        self.read().candidates.iter().find(|c| c.id == id).cloned()
    }

    pub fn active_job_id(&self) -> Option<Uuid> {
        self.read().active_job_id
    }

    pub fn active_job(&self) -> Option<JobDescription> {
        let tables = self.read();
        let id = tables.active_job_id?;
        tables.jobs.iter().find(|j| j.id == id).cloned()
    }

    pub fn select_job(&self, id: Uuid) -> Result<JobDescription> {
        let mut tables = self.write();
        let job = tables
            .jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
        tables.active_job_id = Some(id);
        Ok(job)
    }

    pub fn screening_state(&self, candidate_id: Uuid) -> ScreeningState {
        self.read()
            .screenings
            .get(&candidate_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Marks a screening as in flight. Returns `false` if one is already
    /// running for this candidate.
    pub fn begin_screening(&self, candidate_id: Uuid) -> bool {
        let mut tables = self.write();
        let state = tables.screenings.entry(candidate_id).or_default();
        if state.is_in_flight() {
            return false;
        }
        *state = ScreeningState::InFlight { started_at: now() };
        true
    }

    pub fn finish_screening(&self, candidate_id: Uuid, state: ScreeningState) {
        self.write().screenings.insert(candidate_id, state);
    }
}
