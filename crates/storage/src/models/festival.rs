use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Festival/event/category activity status values stored in `status` columns.
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

/// Top-level competition container. At most one festival is `active`
/// system-wide; the transition is a transactional deactivate-then-activate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Festival {
    pub festival_id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl Festival {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}
