//! Food Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Food category entity (a named section of a restaurant's menu)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCategory {
    pub id: Option<String>,
    pub name: String,
    /// Restaurant ID this category belongs to
    pub restaurant: Option<String>,
}

/// Create food category payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodCategoryCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Update food category payload
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCategoryUpdate {
    pub name: Option<String>,
    pub restaurant: Option<String>,
}
