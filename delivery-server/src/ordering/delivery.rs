//! Delivery time estimation

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::OrderingError;
use crate::db::models::MenuItem;

/// Fixed transit time from restaurant to customer, in minutes
pub const TRANSIT_MINUTES: i64 = 30;

/// The longest cook time among the selected items.
///
/// The kitchen prepares items in parallel, so the slowest item drives
/// the estimate.
pub fn slowest_cook_time(items: &[MenuItem]) -> Result<Decimal, OrderingError> {
    items
        .iter()
        .map(|item| item.time_to_cook)
        .max()
        .ok_or(OrderingError::NoItemsSelected)
}

/// Estimate the delivery time for a purchase.
///
/// placed time + fixed transit + the slowest cook time truncated to
/// whole minutes. A cook time large enough to push the estimate past
/// the representable date range is an error, never a panic.
pub fn estimated_delivery_time(
    placed: NaiveDateTime,
    items: &[MenuItem],
) -> Result<NaiveDateTime, OrderingError> {
    let cook = slowest_cook_time(items)?.trunc();
    let out_of_range = || OrderingError::EstimateOutOfRange {
        minutes: cook.to_string(),
    };

    let cook_minutes = cook.to_i64().ok_or_else(out_of_range)?;
    let total_minutes = TRANSIT_MINUTES
        .checked_add(cook_minutes)
        .ok_or_else(out_of_range)?;
    let delta = Duration::try_minutes(total_minutes).ok_or_else(out_of_range)?;
    placed.checked_add_signed(delta).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::time::{format_order_time, parse_order_time};

    fn item(time_to_cook: Decimal) -> MenuItem {
        MenuItem {
            id: None,
            name: "test".to_string(),
            ingredients: "test".to_string(),
            price: Decimal::from(10),
            time_to_cook,
            food_category: None,
        }
    }

    #[test]
    fn test_estimate_uses_slowest_item() {
        let placed = parse_order_time("2022-06-18 14:30").unwrap();
        let items = vec![item(Decimal::from(20)), item(Decimal::from(17))];

        let estimated = estimated_delivery_time(placed, &items).unwrap();
        assert_eq!(format_order_time(estimated), "2022-06-18 15:20");
    }

    #[test]
    fn test_fractional_cook_time_is_truncated() {
        let placed = parse_order_time("2022-06-18 14:30").unwrap();
        let items = vec![item(Decimal::new(155, 1))]; // 15.5 minutes

        let estimated = estimated_delivery_time(placed, &items).unwrap();
        assert_eq!(format_order_time(estimated), "2022-06-18 15:15");
    }

    #[test]
    fn test_estimate_crosses_midnight() {
        let placed = parse_order_time("2022-06-18 23:45").unwrap();
        let items = vec![item(Decimal::from(30))];

        let estimated = estimated_delivery_time(placed, &items).unwrap();
        assert_eq!(format_order_time(estimated), "2022-06-19 00:45");
    }

    #[test]
    fn test_empty_items_rejected() {
        let placed = parse_order_time("2022-06-18 14:30").unwrap();
        assert_eq!(
            estimated_delivery_time(placed, &[]).unwrap_err(),
            OrderingError::NoItemsSelected
        );
    }

    #[test]
    fn test_huge_cook_time_is_an_error_not_a_panic() {
        let placed = parse_order_time("2022-06-18 14:30").unwrap();

        // Past chrono's maximum year
        let items = vec![item(Decimal::from(1_000_000_000_000i64))];
        let err = estimated_delivery_time(placed, &items).unwrap_err();
        assert!(matches!(err, OrderingError::EstimateOutOfRange { .. }));

        // Past i64 minutes entirely
        let items = vec![item(Decimal::MAX)];
        let err = estimated_delivery_time(placed, &items).unwrap_err();
        assert!(matches!(err, OrderingError::EstimateOutOfRange { .. }));
    }
}
