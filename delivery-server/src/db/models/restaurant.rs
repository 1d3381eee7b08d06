//! Restaurant Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::CityId;

/// Restaurant ID type
pub type RestaurantId = RecordId;

/// Restaurant model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default, skip_serializing)]
    pub id: Option<RestaurantId>,
    pub name: String,
    pub address: String,
    /// Record link to city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<CityId>,
}
