//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FoodCategoryId;

/// Menu item ID type
pub type MenuItemId = surrealdb::RecordId;

/// Menu item model matching the SurrealDB schema
///
/// Prices and cook times are stored as numbers (Decimal with float
/// serde, the platform's money convention).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, skip_serializing)]
    pub id: Option<MenuItemId>,
    pub name: String,
    pub ingredients: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Preparation time in minutes
    #[serde(with = "rust_decimal::serde::float")]
    pub time_to_cook: Decimal,
    /// Record link to food_category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_category: Option<FoodCategoryId>,
}
