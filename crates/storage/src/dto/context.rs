use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::event::EventResponse;
use super::festival::FestivalResponse;

/// The currently active festival and its active event, either of which may
/// be absent. Recomputed on every request; a missing read resolves to
/// `null`, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActiveContextResponse {
    pub festival: Option<FestivalResponse>,
    pub event: Option<EventResponse>,
}
