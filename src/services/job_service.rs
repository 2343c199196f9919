use uuid::Uuid;
use validator::Validate;

use crate::database::store::Store;
use crate::dto::job_dto::CreateJobPayload;
use crate::error::{Error, Result};
use crate::models::job::JobDescription;

#[derive(Clone)]
pub struct JobService {
    store: Store,
}

impl JobService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateJobPayload) -> Result<JobDescription> {
        let payload = payload.normalized();
        payload.validate()?;

        let job = self.store.add_job(JobDescription::new(
            payload.title,
            payload.company,
            payload.content,
        ));
        tracing::info!(job_id = %job.id, title = %job.title, "Job created");
        Ok(job)
    }

    pub fn list(&self) -> Vec<JobDescription> {
        self.store.jobs()
    }

    pub fn get(&self, id: Uuid) -> Result<JobDescription> {
        self.store
            .job(id)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    pub fn active(&self) -> Option<JobDescription> {
        self.store.active_job()
    }

    pub fn select(&self, id: Uuid) -> Result<JobDescription> {
        let job = self.store.select_job(id)?;
        tracing::info!(job_id = %job.id, "Active job changed");
        Ok(job)
    }
}
