//! Role Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Option<String>,
    pub name: String,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
