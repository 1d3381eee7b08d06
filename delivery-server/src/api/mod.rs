//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`cities`] - city catalog
//! - [`restaurants`] - restaurant catalog
//! - [`food_categories`] - food category catalog
//! - [`menu_items`] - menu item catalog
//! - [`customers`] - customer accounts
//! - [`roles`] - customer roles
//! - [`purchases`] - purchase placement and delivery tracking

pub mod convert;

pub mod health;

// Catalog API
pub mod cities;
pub mod food_categories;
pub mod menu_items;
pub mod restaurants;

// Account API
pub mod customers;
pub mod roles;

// Order API
pub mod purchases;

use axum::Router;

use crate::core::ServerState;

/// Build a router with every API route registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(cities::router())
        .merge(restaurants::router())
        .merge(food_categories::router())
        .merge(menu_items::router())
        .merge(customers::router())
        .merge(roles::router())
        .merge(purchases::router())
}
