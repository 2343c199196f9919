use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-candidate state of the "Run AI Screen" operation. Each candidate owns
/// its own state, so screening one row never blocks another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ScreeningState {
    Idle,
    #[serde(rename_all = "camelCase")]
    InFlight { started_at: DateTime<Utc> },
    #[serde(rename_all = "camelCase")]
    Succeeded { score: u8, finished_at: DateTime<Utc> },
    #[serde(rename_all = "camelCase")]
    Failed { error: String, finished_at: DateTime<Utc> },
}

impl ScreeningState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ScreeningState::InFlight { .. })
    }
}

impl Default for ScreeningState {
    fn default() -> Self {
        ScreeningState::Idle
    }
}
