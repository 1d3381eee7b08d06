//! Food Category Model

use serde::{Deserialize, Serialize};

use super::RestaurantId;

/// Food category ID type
pub type FoodCategoryId = surrealdb::RecordId;

/// Food category model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCategory {
    #[serde(default, skip_serializing)]
    pub id: Option<FoodCategoryId>,
    pub name: String,
    /// Record link to restaurant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantId>,
}
