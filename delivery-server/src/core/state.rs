use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use shared::error::{AppError, AppResult};

/// Server state shared by every handler
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | configuration (immutable) |
/// | db | Surreal<Db> | embedded database handle |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state: working directories first, then the
    /// database under `work_dir/database`.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_dir()).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
