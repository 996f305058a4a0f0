use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::JudgeAssignment;

/// Request payload for assigning a judge to a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignJudgeRequest {
    pub judge_id: Uuid,
    pub category_id: Uuid,
}

/// Response containing an assignment record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    pub judge_id: Uuid,
    pub category_id: Uuid,
    pub status: String,
}

impl From<JudgeAssignment> for AssignmentResponse {
    fn from(assignment: JudgeAssignment) -> Self {
        Self {
            judge_id: assignment.judge_id,
            category_id: assignment.category_id,
            status: assignment.status,
        }
    }
}
