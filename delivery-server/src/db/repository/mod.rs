//! Repository Module
//!
//! One repository per entity, each built on [`BaseRepository`]. Create
//! paths go through the ordering guard; partial updates go through the
//! typed merge. Repositories return `AppResult` directly, mapping raw
//! storage failures with [`db_err`] at each call site.

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
pub use city::CityRepository;
pub use customer::CustomerRepository;
pub use food_category::FoodCategoryRepository;
pub use menu_item::MenuItemRepository;
pub use purchase::PurchaseRepository;
pub use restaurant::RestaurantRepository;
pub use role::RoleRepository;

use shared::error::{AppError, AppResult};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use crate::db::models::ref_to_record_id;
use crate::ordering::error::{EntityKind, OrderingError};

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Map a storage failure into the unified error type
pub(crate) fn db_err(err: surrealdb::Error) -> AppError {
    AppError::database(err.to_string())
}

/// Resolve a wire ID into a RecordId for the given table.
///
/// A reference that does not parse, or that names a different table,
/// cannot exist, so it fails with the kind-specific not-found error.
pub(crate) fn parse_id(kind: EntityKind, table: &str, id: &str) -> AppResult<RecordId> {
    ref_to_record_id(table, id).ok_or_else(|| {
        OrderingError::NotFound {
            kind,
            id: id.to_string(),
        }
        .into()
    })
}
