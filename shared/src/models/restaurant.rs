//! Restaurant Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    /// City ID this restaurant belongs to
    pub city: Option<String>,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 5, message = "address must be at least 5 characters"))]
    pub address: String,
}
