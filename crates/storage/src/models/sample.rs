use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single entry under judgment, linked to a producer. `display_order`
/// drives the judge-facing and results-facing sequence (ascending, ties
/// broken by insertion time).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sample {
    pub sample_id: Uuid,
    pub producer_id: Uuid,
    pub category_id: Uuid,
    pub sample_code: String,
    pub year: i32,
    pub alcohol_strength: Decimal,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
}
