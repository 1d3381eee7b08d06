//! Delivery Server — food delivery catalog and ordering backend
//!
//! # Module structure
//!
//! ```text
//! delivery-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── ordering/      # pricing, delivery estimation, purchase assembly
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # embedded SurrealDB models and repositories
//! └── utils/         # logging and validation helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod ordering;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
