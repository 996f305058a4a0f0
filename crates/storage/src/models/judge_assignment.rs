use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const ASSIGNMENT_ACTIVE: &str = "active";
pub const ASSIGNMENT_FINISHED: &str = "finished";

/// Binding of a judge to a category, keyed by (judge_id, category_id).
///
/// `finished` means the judge has locked the category: no further score
/// writes are accepted for its samples. There is no unlock operation, but
/// an explicit re-assign resets the pair to `active`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JudgeAssignment {
    pub judge_id: Uuid,
    pub category_id: Uuid,
    pub status: String,
}

impl JudgeAssignment {
    pub fn is_finished(&self) -> bool {
        self.status == ASSIGNMENT_FINISHED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(status: &str) -> JudgeAssignment {
        JudgeAssignment {
            judge_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_finished_status() {
        assert!(assignment(ASSIGNMENT_FINISHED).is_finished());
        assert!(!assignment(ASSIGNMENT_ACTIVE).is_finished());
    }
}
