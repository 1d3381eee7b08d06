//! Purchase Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::{CustomerId, MenuItemId, RestaurantId};

/// Purchase ID type
pub type PurchaseId = RecordId;

/// Purchase model matching the SurrealDB schema
///
/// Timestamps are stored in the wire format (`yyyy-MM-dd HH:mm`) so
/// they round-trip bit-for-bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(default, skip_serializing)]
    pub id: Option<PurchaseId>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Record link to restaurant
    pub restaurant: RestaurantId,
    /// Record link to customer
    pub customer: CustomerId,
    pub purchase_placed_time: String,
    pub estimated_delivery_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery_time: Option<String>,
    /// Record links to the purchased menu items
    pub menu_items: Vec<MenuItemId>,
}
