use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A judged grouping of samples within an event. Deletable only while no
/// sample under it has a recorded score.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}
