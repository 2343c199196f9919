use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;

/// Delivers an interview invitation to a candidate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InviteSender: Send + Sync {
    async fn send_invite(&self, candidate: &Candidate) -> Result<()>;
}

/// Stands in for a mail provider: waits a fixed delay and always succeeds.
#[derive(Clone, Debug)]
pub struct SimulatedInviteSender {
    delay: Duration,
}

impl SimulatedInviteSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl InviteSender for SimulatedInviteSender {
    async fn send_invite(&self, candidate: &Candidate) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(candidate_id = %candidate.id, "Simulated interview invite sent");
        Ok(())
    }
}

/// Posts the invite as a JSON event to an external webhook.
#[derive(Clone)]
pub struct WebhookInviteSender {
    client: Client,
    target_url: String,
}

impl WebhookInviteSender {
    pub fn new(client: Client, target_url: String) -> Self {
        Self { client, target_url }
    }
}

#[async_trait]
impl InviteSender for WebhookInviteSender {
    async fn send_invite(&self, candidate: &Candidate) -> Result<()> {
        let payload = serde_json::json!({
            "event": "interview_invite",
            "candidate_id": candidate.id,
            "name": candidate.name,
            "email": candidate.email,
            "match_percentage": candidate.score(),
        });

        let res = self
            .client
            .post(&self.target_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Invite(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Invite webhook rejected delivery");
            return Err(Error::Invite(format!("webhook returned {}: {}", status, body)));
        }

        tracing::info!(candidate_id = %candidate.id, "Interview invite delivered to webhook");
        Ok(())
    }
}

pub fn build_invite_sender(config: &Config, client: Client) -> Arc<dyn InviteSender> {
    match &config.invite_webhook_url {
        Some(url) => Arc::new(WebhookInviteSender::new(client, url.clone())),
        None => Arc::new(SimulatedInviteSender::new(config.invite_delay)),
    }
}
