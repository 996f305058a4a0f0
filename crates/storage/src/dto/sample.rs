use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Sample;

/// Request payload for creating or updating a sample
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SampleData {
    pub producer_id: Uuid,

    pub category_id: Uuid,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Sample code must be between 1 and 64 characters"
    ))]
    pub sample_code: String,

    #[validate(range(min = 1900, max = 2200, message = "Year is out of range"))]
    pub year: i32,

    pub alcohol_strength: Decimal,

    #[serde(default)]
    pub display_order: i32,
}

/// Response containing sample details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SampleResponse {
    pub sample_id: Uuid,
    pub producer_id: Uuid,
    pub category_id: Uuid,
    pub sample_code: String,
    pub year: i32,
    pub alcohol_strength: Decimal,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
}

impl From<Sample> for SampleResponse {
    fn from(sample: Sample) -> Self {
        Self {
            sample_id: sample.sample_id,
            producer_id: sample.producer_id,
            category_id: sample.category_id,
            sample_code: sample.sample_code,
            year: sample.year,
            alcohol_strength: sample.alcohol_strength,
            display_order: sample.display_order,
            created_at: sample.created_at,
        }
    }
}
