//! City Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// City entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: Option<String>,
    pub name: String,
    pub zipcode: String,
}

/// Create city payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CityCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "zipcode must not be empty"))]
    pub zipcode: String,
}
