use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Score, ScoreCriteria};

/// Request payload for saving a judge's score for a sample.
///
/// Criterion ranges and the 0.05 step are checked by
/// [`ScoreCriteria::validate`] in the scoring service, not here: the web
/// layer only verifies shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveScoreRequest {
    pub color: Decimal,
    pub clarity: Decimal,
    pub typicality: Decimal,
    pub aroma: Decimal,
    pub taste: Decimal,

    #[validate(length(max = 2000, message = "Comment is too long"))]
    #[serde(default)]
    pub comment: String,
}

impl SaveScoreRequest {
    pub fn criteria(&self) -> ScoreCriteria {
        ScoreCriteria {
            color: self.color,
            clarity: self.clarity,
            typicality: self.typicality,
            aroma: self.aroma,
            taste: self.taste,
        }
    }
}

/// Response containing a single score with its display total
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub judge_id: Uuid,
    pub sample_id: Uuid,
    pub color: Decimal,
    pub clarity: Decimal,
    pub typicality: Decimal,
    pub aroma: Decimal,
    pub taste: Decimal,
    pub comment: String,
    pub total: Decimal,
    pub scored_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        let total = score.display_total();
        Self {
            judge_id: score.judge_id,
            sample_id: score.sample_id,
            color: score.color,
            clarity: score.clarity,
            typicality: score.typicality,
            aroma: score.aroma,
            taste: score.taste,
            comment: score.comment,
            total,
            scored_at: score.scored_at,
            updated_at: score.updated_at,
        }
    }
}
