use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Festival;

/// Request payload for creating a new festival
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFestivalRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

/// Response containing festival details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FestivalResponse {
    pub festival_id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<Festival> for FestivalResponse {
    fn from(festival: Festival) -> Self {
        Self {
            festival_id: festival.festival_id,
            name: festival.name,
            status: festival.status,
            created_at: festival.created_at,
        }
    }
}
