use reqwest::Client;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::models::analysis::MatchAnalysis;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("scoring service credential is not configured (set API_KEY)")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scoring service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("scoring service returned no content")]
    EmptyContent,

    #[error("could not parse analysis: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid analysis: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Wire shape of the model's answer. Every field is required; serde rejects
/// the payload if one is missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    match_percentage: f64,
    key_strengths: Vec<String>,
    gap_analysis: Vec<String>,
    recommendation: String,
    suggested_questions: Vec<String>,
}

/// Client for the hosted generative model that scores a resume against a job
/// description. One request per call: no retries, no caching.
#[derive(Clone)]
pub struct ScoringService {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl ScoringService {
    pub fn new(api_key: Option<String>, model: String, base_url: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn screen_candidate(
        &self,
        job_content: &str,
        resume_content: &str,
    ) -> Result<MatchAnalysis, AnalysisError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredential)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let payload = build_request(job_content, resume_content);

        tracing::info!(model = %self.model, "Sending screening request");
        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), "Scoring service rejected request");
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = res.json().await?;
        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let analysis = parse_analysis(&text)?;
        tracing::info!(score = analysis.match_percentage, "Screening response parsed");
        Ok(analysis)
    }
}

fn build_request(job_content: &str, resume_content: &str) -> JsonValue {
    let prompt = format!(
        "Analyze the following Candidate Resume against the Job Description.\n\n\
         JOB DESCRIPTION:\n{}\n\n\
         CANDIDATE RESUME:\n{}\n",
        job_content, resume_content
    );

    serde_json::json!({
        "contents": [
            { "role": "user", "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "matchPercentage": {
                        "type": "NUMBER",
                        "description": "Match score from 0-100"
                    },
                    "keyStrengths": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Top 3-5 technical and soft skill strengths"
                    },
                    "gapAnalysis": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Specific missing skills or experiences"
                    },
                    "recommendation": {
                        "type": "STRING",
                        "description": "Final hiring recommendation brief"
                    },
                    "suggestedQuestions": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "5 technical interview questions tailored to the candidate's specific background"
                    }
                },
                "required": [
                    "matchPercentage",
                    "keyStrengths",
                    "gapAnalysis",
                    "recommendation",
                    "suggestedQuestions"
                ]
            }
        }
    })
}

/// Parses the model's JSON text into a validated analysis.
pub fn parse_analysis(text: &str) -> Result<MatchAnalysis, AnalysisError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(AnalysisError::EmptyContent);
    }

    let raw: RawAnalysis = serde_json::from_str(text)?;
    if !raw.match_percentage.is_finite() || !(0.0..=100.0).contains(&raw.match_percentage) {
        return Err(AnalysisError::Invalid(format!(
            "matchPercentage {} is outside 0-100",
            raw.match_percentage
        )));
    }

    Ok(MatchAnalysis {
        match_percentage: raw.match_percentage.round() as u8,
        key_strengths: raw.key_strengths,
        gap_analysis: raw.gap_analysis,
        recommendation: raw.recommendation,
        suggested_questions: raw.suggested_questions,
    })
}

fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(rest) => rest.trim().strip_suffix("```").unwrap_or(rest).trim(),
        None => text,
    }
}
