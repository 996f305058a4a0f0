use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::event::EventResponse;

/// One judge's contribution to a sample's result row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntry {
    pub judge_id: Uuid,
    /// Username of the judge, or a placeholder when unresolved.
    pub judge_name: String,
    pub color: Decimal,
    pub clarity: Decimal,
    pub typicality: Decimal,
    pub aroma: Decimal,
    pub taste: Decimal,
    pub total: Decimal,
    pub comment: String,
}

/// Aggregated result for a single sample: per-criterion averages across the
/// judges who scored it, with a zero average when nobody has.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SampleResult {
    pub sample_id: Uuid,
    pub sample_code: String,
    pub year: i32,
    pub alcohol_strength: Decimal,
    pub producer_name: String,
    pub avg_color: Decimal,
    pub avg_clarity: Decimal,
    pub avg_typicality: Decimal,
    pub avg_aroma: Decimal,
    pub avg_taste: Decimal,
    pub avg_total: Decimal,
    pub judges_scored: i64,
    pub total_judges: i64,
    pub scores: Vec<ScoreEntry>,
}

/// Ranked results for one category, samples ordered by average total
/// descending (stable for ties).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResult {
    pub category_id: Uuid,
    pub name: String,
    pub samples: Vec<SampleResult>,
    /// Judges whose assignment for this category is `finished`.
    pub locked_judge_ids: Vec<Uuid>,
}

/// Full results view for an event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResultsResponse {
    pub event: EventResponse,
    pub categories: Vec<CategoryResult>,
}
