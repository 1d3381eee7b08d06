//! Database Models
//!
//! Row types stored in SurrealDB. References between entities are
//! record links (`RecordId`); the API layer converts them to plain
//! strings via `api::convert`.

// Catalog
pub mod city;
pub mod food_category;
pub mod menu_item;
pub mod restaurant;

// Accounts
pub mod customer;
pub mod role;

// Orders
pub mod purchase;

// Re-exports
pub use city::{City, CityId};
pub use customer::{Customer, CustomerId};
pub use food_category::{FoodCategory, FoodCategoryId};
pub use menu_item::{MenuItem, MenuItemId};
pub use purchase::{Purchase, PurchaseId};
pub use restaurant::{Restaurant, RestaurantId};
pub use role::{Role, RoleId};

use surrealdb::RecordId;

// =============================================================================
// ID Convention: the whole stack uses the "table:key" form
// =============================================================================
//
//   - parse:   let id: RecordId = "city:abc".parse()?;
//   - build:   RecordId::from_table_key("city", "abc")
//   - table:   id.table()
//   - key:     id.key().to_string()
//   - string:  id.to_string() yields "city:abc"

/// Resolve a wire reference (either `table:key` or a bare key) into a
/// RecordId for the expected table.
///
/// Returns None when the reference names a different table or does not
/// parse.
pub fn ref_to_record_id(table: &str, id: &str) -> Option<RecordId> {
    if id.contains(':') {
        let rid: RecordId = id.parse().ok()?;
        (rid.table() == table).then_some(rid)
    } else {
        Some(RecordId::from_table_key(table, id))
    }
}
