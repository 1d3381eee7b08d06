//! Model conversion
//!
//! Maps database rows (db::models) to API response models
//! (shared::models). Record links flatten to their `table:key` string
//! form on the wire.

use crate::db::models as db;
use shared::models as api;

// ============ Helpers ============

pub fn record_id_to_string(id: &surrealdb::RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<surrealdb::RecordId>) -> Option<String> {
    id.as_ref().map(record_id_to_string)
}

pub fn record_ids_to_strings(ids: &[surrealdb::RecordId]) -> Vec<String> {
    ids.iter().map(record_id_to_string).collect()
}

// ============ City ============

impl From<db::City> for api::City {
    fn from(c: db::City) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            name: c.name,
            zipcode: c.zipcode,
        }
    }
}

// ============ Restaurant ============

impl From<db::Restaurant> for api::Restaurant {
    fn from(r: db::Restaurant) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            name: r.name,
            address: r.address,
            city: option_record_id_to_string(&r.city),
        }
    }
}

// ============ FoodCategory ============

impl From<db::FoodCategory> for api::FoodCategory {
    fn from(c: db::FoodCategory) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            name: c.name,
            restaurant: option_record_id_to_string(&c.restaurant),
        }
    }
}

// ============ MenuItem ============

impl From<db::MenuItem> for api::MenuItem {
    fn from(m: db::MenuItem) -> Self {
        Self {
            id: option_record_id_to_string(&m.id),
            name: m.name,
            ingredients: m.ingredients,
            price: m.price,
            time_to_cook: m.time_to_cook,
            food_category: option_record_id_to_string(&m.food_category),
        }
    }
}

// ============ Customer ============

impl From<db::Customer> for api::Customer {
    fn from(c: db::Customer) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            name: c.name,
            city: record_id_to_string(&c.city),
            address: c.address,
            phone: c.phone,
            email: c.email,
            roles: record_ids_to_strings(&c.roles),
        }
    }
}

// ============ Role ============

impl From<db::Role> for api::Role {
    fn from(r: db::Role) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            name: r.name,
        }
    }
}

// ============ Purchase ============

impl From<db::Purchase> for api::Purchase {
    fn from(p: db::Purchase) -> Self {
        Self {
            id: option_record_id_to_string(&p.id),
            price: p.price,
            restaurant: record_id_to_string(&p.restaurant),
            customer: record_id_to_string(&p.customer),
            purchase_placed_time: p.purchase_placed_time,
            estimated_delivery_time: p.estimated_delivery_time,
            actual_delivery_time: p.actual_delivery_time,
            menu_items: record_ids_to_strings(&p.menu_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::RecordId;

    #[test]
    fn test_city_flattens_id() {
        let city = db::City {
            id: Some(RecordId::from_table_key("city", "miami")),
            name: "Miami".to_string(),
            zipcode: "33101".to_string(),
        };
        let api_city: api::City = city.into();
        assert_eq!(api_city.id.as_deref(), Some("city:miami"));
        assert_eq!(api_city.name, "Miami");
    }

    #[test]
    fn test_restaurant_without_city() {
        let restaurant = db::Restaurant {
            id: None,
            name: "Trattoria".to_string(),
            address: "12 Ocean Drive".to_string(),
            city: None,
        };
        let api_restaurant: api::Restaurant = restaurant.into();
        assert!(api_restaurant.id.is_none());
        assert!(api_restaurant.city.is_none());
    }
}
