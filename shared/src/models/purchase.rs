//! Purchase Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Purchase entity
///
/// `price` and `estimated_delivery_time` are computed server-side when
/// the purchase is placed. All timestamps use the `yyyy-MM-dd HH:mm`
/// wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Restaurant ID the purchase was placed at
    pub restaurant: String,
    /// Customer ID who placed the purchase
    pub customer: String,
    pub purchase_placed_time: String,
    pub estimated_delivery_time: String,
    pub actual_delivery_time: Option<String>,
    /// Menu item IDs included in the purchase
    pub menu_items: Vec<String>,
}

/// Place purchase payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PurchaseCreate {
    #[validate(length(min = 1, message = "restaurant must not be empty"))]
    pub restaurant: String,
    #[validate(length(min = 1, message = "customer must not be empty"))]
    pub customer: String,
    #[validate(length(min = 1, message = "purchase_placed_time must not be empty"))]
    pub purchase_placed_time: String,
    #[validate(length(min = 1, message = "at least one menu item must be selected"))]
    pub menu_items: Vec<String>,
}

/// Record actual delivery payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PurchaseDelivered {
    #[validate(length(min = 1, message = "actual_delivery_time must not be empty"))]
    pub actual_delivery_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_payload_requires_items() {
        let payload = PurchaseCreate {
            restaurant: "restaurant:r1".to_string(),
            customer: "customer:c1".to_string(),
            purchase_placed_time: "2022-06-18 14:30".to_string(),
            menu_items: vec![],
        };
        assert!(payload.validate().is_err());

        let payload = PurchaseCreate {
            menu_items: vec!["menu_item:m1".to_string()],
            ..payload
        };
        assert!(payload.validate().is_ok());
    }
}
