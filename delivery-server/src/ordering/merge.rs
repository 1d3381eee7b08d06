//! Typed partial-update patches
//!
//! Each mutable entity implements [`Merge`] for its patch type. A patch
//! field carries `Option`: `Some(v)` overwrites the stored value, `None`
//! leaves it untouched. The compiler checks field-to-field mapping, so
//! a patch can only fail when a reference string cannot be mapped onto
//! the target schema.

use shared::models::{FoodCategoryUpdate, MenuItemUpdate};

use super::error::OrderingError;
use crate::db::models::{FoodCategory, MenuItem, ref_to_record_id};

/// Apply a partial patch onto a stored record
pub trait Merge<P> {
    fn merge(&mut self, patch: P) -> Result<(), OrderingError>;
}

impl Merge<FoodCategoryUpdate> for FoodCategory {
    fn merge(&mut self, patch: FoodCategoryUpdate) -> Result<(), OrderingError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(restaurant) = patch.restaurant {
            let rid = ref_to_record_id("restaurant", &restaurant).ok_or_else(|| {
                OrderingError::MergeFailed {
                    reason: format!("'{restaurant}' is not a valid restaurant reference"),
                }
            })?;
            self.restaurant = Some(rid);
        }
        Ok(())
    }
}

impl Merge<MenuItemUpdate> for MenuItem {
    fn merge(&mut self, patch: MenuItemUpdate) -> Result<(), OrderingError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(time_to_cook) = patch.time_to_cook {
            self.time_to_cook = time_to_cook;
        }
        if let Some(food_category) = patch.food_category {
            let rid = ref_to_record_id("food_category", &food_category).ok_or_else(|| {
                OrderingError::MergeFailed {
                    reason: format!("'{food_category}' is not a valid food category reference"),
                }
            })?;
            self.food_category = Some(rid);
        }
        Ok(())
    }
}
