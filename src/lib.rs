pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::database::store::Store;
use crate::error::{Error, Result};
use crate::services::{
    candidate_service::CandidateService,
    job_service::JobService,
    navigation_service::Navigator,
    notification_service::{build_invite_sender, InviteSender},
    scoring_service::ScoringService,
    screening_service::ScreeningService,
    toast_service::ToastQueue,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub navigator: Navigator,
    pub toasts: ToastQueue,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub screening_service: ScreeningService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let store = if config.seed_demo_job {
            Store::seeded()
        } else {
            Store::new()
        };
        let scoring = ScoringService::new(
            config.api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            http_client.clone(),
        );
        let invites = build_invite_sender(config, http_client);

        Ok(Self::from_parts(
            store,
            scoring,
            invites,
            ToastQueue::new(config.toast_ttl),
        ))
    }

    pub fn from_parts(
        store: Store,
        scoring: ScoringService,
        invites: Arc<dyn InviteSender>,
        toasts: ToastQueue,
    ) -> Self {
        Self {
            job_service: JobService::new(store.clone()),
            candidate_service: CandidateService::new(store.clone(), toasts.clone(), invites),
            screening_service: ScreeningService::new(store.clone(), scoring, toasts.clone()),
            navigator: Navigator::new(),
            store,
            toasts,
        }
    }
}
