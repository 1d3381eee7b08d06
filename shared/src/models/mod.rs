//! Data models
//!
//! Wire-level entities shared between the delivery server and clients.
//! All IDs are strings in `table:key` form; references to other entities
//! are plain ID strings.

pub mod city;
pub mod customer;
pub mod food_category;
pub mod menu_item;
pub mod purchase;
pub mod restaurant;
pub mod role;

// Re-exports
pub use city::*;
pub use customer::*;
pub use food_category::*;
pub use menu_item::*;
pub use purchase::*;
pub use restaurant::*;
pub use role::*;
