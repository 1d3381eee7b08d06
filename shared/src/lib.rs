//! Shared types for the delivery platform
//!
//! Wire-level data models and the unified error system used by the
//! delivery server and its clients.

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
