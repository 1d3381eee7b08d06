//! Purchase assembly
//!
//! Turns a validated request into a persist-ready purchase: parse the
//! placed time, require a non-empty item list, price the order, estimate
//! the delivery, and fill in the record. Nothing here touches storage;
//! on any failure the caller persists nothing.

use surrealdb::RecordId;

use super::error::OrderingError;
use super::{delivery, pricing, time};
use crate::db::models::{MenuItem, Purchase};

/// Assemble a persist-ready purchase.
///
/// `items` are the already-resolved menu item records the customer
/// selected. The actual delivery time starts unset; it is recorded
/// later by the courier flow.
pub fn assemble(
    restaurant: RecordId,
    customer: RecordId,
    placed_time: &str,
    items: &[MenuItem],
) -> Result<Purchase, OrderingError> {
    let placed = time::parse_order_time(placed_time)?;

    if items.is_empty() {
        return Err(OrderingError::NoItemsSelected);
    }

    let price = pricing::total_price(items)?;
    let estimated = delivery::estimated_delivery_time(placed, items)?;

    Ok(Purchase {
        id: None,
        price,
        restaurant,
        customer,
        purchase_placed_time: time::format_order_time(placed),
        estimated_delivery_time: time::format_order_time(estimated),
        actual_delivery_time: None,
        menu_items: items.iter().filter_map(|item| item.id.clone()).collect(),
    })
}
