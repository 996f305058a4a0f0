use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::festival::STATUS_ACTIVE;

/// A yearly instance of a festival. At most one event per festival is
/// `active` at a time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FestivalEvent {
    pub event_id: Uuid,
    pub festival_id: Uuid,
    pub name: String,
    pub year: i32,
    pub status: String,
    pub closed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl FestivalEvent {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}
