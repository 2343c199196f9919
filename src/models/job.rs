use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::time::now_millis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    /// Full posting text. This is the only field handed to the scoring model.
    pub content: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl JobDescription {
    pub fn new(title: String, company: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            company,
            content,
            created_at: now_millis(),
        }
    }

    pub fn demo() -> Self {
        Self::new(
            "Senior Software Engineer (React)".to_string(),
            "HirePulse AI".to_string(),
            "We are looking for a Senior React Engineer with 5+ years experience. \
             Must know TypeScript, Tailwind, and Node.js. Experience with Generative AI \
             APIs is a plus."
                .to_string(),
        )
    }
}
