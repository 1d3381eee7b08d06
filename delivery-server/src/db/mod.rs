//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) behind a [`DbService`].

pub mod models;
pub mod repository;

use std::path::Path;

use shared::error::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "delivery";
const DATABASE: &str = "delivery";

/// Unique indexes backing the create guard's check-then-act window.
/// A concurrent duplicate write fails here instead of slipping through.
const SCHEMA: &[&str] = &[
    "DEFINE INDEX IF NOT EXISTS city_name ON TABLE city FIELDS name UNIQUE",
    "DEFINE INDEX IF NOT EXISTS restaurant_name ON TABLE restaurant FIELDS name UNIQUE",
    "DEFINE INDEX IF NOT EXISTS food_category_name ON TABLE food_category FIELDS name UNIQUE",
    "DEFINE INDEX IF NOT EXISTS menu_item_name ON TABLE menu_item FIELDS name UNIQUE",
    "DEFINE INDEX IF NOT EXISTS role_name ON TABLE role FIELDS name UNIQUE",
    "DEFINE INDEX IF NOT EXISTS customer_email ON TABLE customer FIELDS email UNIQUE",
];

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under `db_dir` and define the schema
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        for statement in SCHEMA {
            db.query(*statement)
                .await
                .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        }

        tracing::info!("Database ready (embedded SurrealDB, RocksDB engine)");
        Ok(Self { db })
    }
}
