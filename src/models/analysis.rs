use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Score at or above which a candidate counts as a high match.
pub const HIGH_MATCH_THRESHOLD: u8 = 80;
pub const MEDIUM_MATCH_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub match_percentage: u8,
    pub key_strengths: Vec<String>,
    pub gap_analysis: Vec<String>,
    pub recommendation: String,
    pub suggested_questions: Vec<String>,
}

impl MatchAnalysis {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.match_percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchBand {
    High,
    Medium,
    Low,
}

impl MatchBand {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_MATCH_THRESHOLD {
            MatchBand::High
        } else if score >= MEDIUM_MATCH_THRESHOLD {
            MatchBand::Medium
        } else {
            MatchBand::Low
        }
    }
}
