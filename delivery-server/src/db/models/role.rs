//! Role Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Role ID type
pub type RoleId = RecordId;

/// Role model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(default, skip_serializing)]
    pub id: Option<RoleId>,
    pub name: String,
}
