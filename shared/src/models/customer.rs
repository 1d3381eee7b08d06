//! Customer Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer entity
///
/// The password never appears here; it is hashed server-side and the
/// hash stays in the database layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<String>,
    pub name: String,
    /// City ID the customer lives in
    pub city: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Role IDs assigned to this customer
    pub roles: Vec<String>,
}

/// Create customer payload
///
/// The password rule (min 8 chars, at least one letter and one digit)
/// is enforced server-side before hashing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 5, message = "address must be at least 5 characters"))]
    pub address: String,
    #[validate(length(equal = 10, message = "phone must be exactly 10 characters"))]
    pub phone: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, message = "at least one role is required"))]
    pub roles: Vec<String>,
}
