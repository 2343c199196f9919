use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    Dashboard,
    Jobs,
    Candidates,
    Analysis,
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}
