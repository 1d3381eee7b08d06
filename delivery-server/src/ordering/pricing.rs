//! Purchase total computation

use rust_decimal::Decimal;

use super::error::OrderingError;
use crate::db::models::MenuItem;

/// Compute the total price of a purchase.
///
/// Each item's price is truncated to a whole currency unit before
/// summation, so 35.99 + 32.50 totals 67. This matches the platform's
/// established billing behavior and is relied upon by clients.
pub fn total_price(items: &[MenuItem]) -> Result<Decimal, OrderingError> {
    if items.is_empty() {
        return Err(OrderingError::NoItemsSelected);
    }
    Ok(items.iter().map(|item| item.price.trunc()).sum())
}
