//! City Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// City ID type
pub type CityId = RecordId;

/// City model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(default, skip_serializing)]
    pub id: Option<CityId>,
    pub name: String,
    pub zipcode: String,
}
