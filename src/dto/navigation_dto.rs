use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::view::View;
use crate::services::navigation_service::NavigationState;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigatePayload {
    pub view: View,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub current_view: View,
    pub selected_candidate_id: Option<Uuid>,
}

impl From<NavigationState> for NavigationResponse {
    fn from(value: NavigationState) -> Self {
        Self {
            current_view: value.current,
            selected_candidate_id: value.selected_candidate,
        }
    }
}
