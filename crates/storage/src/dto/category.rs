use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Category;

/// Comma-separated category id filter for bulk lookups
#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryIdsFilter {
    /// Comma-separated list of category UUIDs
    pub ids: String,
}

impl CategoryIdsFilter {
    pub fn parse_ids(&self) -> Result<Vec<Uuid>, String> {
        self.ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Uuid>().map_err(|_| format!("Invalid id: {s}")))
            .collect()
    }
}

/// Result of the delete-guard probe for a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CanDeleteResponse {
    pub can_delete: bool,
}

/// Request payload for creating a new category under an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

/// Response containing category details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub category_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            event_id: category.event_id,
            name: category.name,
            status: category.status,
            created_at: category.created_at,
        }
    }
}
