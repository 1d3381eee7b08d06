//! Order-domain engine
//!
//! Pure domain logic behind the purchase flow and the catalog write
//! paths:
//!
//! - [`guard`]: lookup-then-save creation guard enforcing uniqueness keys
//! - [`merge`]: typed partial-update patches for mutable entities
//! - [`pricing`]: purchase total computation
//! - [`delivery`]: delivery time estimation
//! - [`assembler`]: purchase assembly (parse, validate, price, estimate)
//! - [`time`]: the fixed order timestamp format
//! - [`error`]: domain error types
//!
//! Everything here is deterministic and side-effect free; persistence
//! happens in the repositories that call into this module.

pub mod assembler;
pub mod delivery;
pub mod error;
pub mod guard;
pub mod merge;
pub mod pricing;
pub mod time;

pub use assembler::assemble;
pub use delivery::{TRANSIT_MINUTES, estimated_delivery_time};
pub use error::{EntityKind, OrderingError};
pub use guard::create_if_absent;
pub use merge::Merge;
pub use pricing::total_price;
pub use time::{ORDER_TIME_PATTERN, format_order_time, parse_order_time};
