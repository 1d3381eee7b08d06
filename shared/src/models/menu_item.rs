//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu item entity
///
/// Prices and cook times serialize as JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Option<String>,
    pub name: String,
    pub ingredients: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Preparation time in minutes
    #[serde(with = "rust_decimal::serde::float")]
    pub time_to_cook: Decimal,
    /// Food category ID this item belongs to
    pub food_category: Option<String>,
}

/// Create menu item payload
///
/// Decimal minimums (price >= 1, time_to_cook >= 10) are enforced
/// server-side before persisting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "ingredients must not be empty"))]
    pub ingredients: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub time_to_cook: Decimal,
}

/// Update menu item payload
///
/// Absent fields leave the stored value untouched, so a numeric zero can
/// never be confused with "not provided".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub time_to_cook: Option<Decimal>,
    pub food_category: Option<String>,
}
