use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::FestivalEvent;

/// Request payload for creating a new event under a festival
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1900, max = 2200, message = "Year is out of range"))]
    pub year: i32,
}

/// Response containing event details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub festival_id: Uuid,
    pub name: String,
    pub year: i32,
    pub status: String,
    pub closed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<FestivalEvent> for EventResponse {
    fn from(event: FestivalEvent) -> Self {
        Self {
            event_id: event.event_id,
            festival_id: event.festival_id,
            name: event.name,
            year: event.year,
            status: event.status,
            closed_at: event.closed_at,
            created_at: event.created_at,
        }
    }
}
