//! Unified error codes for the delivery platform
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Catalog errors (cities, restaurants, food categories, menu items)
//! - 4xxx: Purchase errors
//! - 5xxx: Account errors (customers, roles)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 3xxx: Catalog ====================
    /// City not found
    CityNotFound = 3001,
    /// City name already exists
    CityNameExists = 3002,
    /// Restaurant not found
    RestaurantNotFound = 3101,
    /// Restaurant name already exists
    RestaurantNameExists = 3102,
    /// Food category not found
    FoodCategoryNotFound = 3201,
    /// Food category name already exists
    FoodCategoryNameExists = 3202,
    /// Menu item not found
    MenuItemNotFound = 3301,
    /// Menu item name already exists
    MenuItemNameExists = 3302,

    // ==================== 4xxx: Purchase ====================
    /// Purchase not found
    PurchaseNotFound = 4001,
    /// No menu items selected for the purchase
    NoItemsSelected = 4002,
    /// Timestamp does not match the expected format
    IncorrectDateFormat = 4003,
    /// Patch could not be applied to the stored record
    MergeFailed = 4004,

    // ==================== 5xxx: Account ====================
    /// Customer not found
    CustomerNotFound = 5001,
    /// Customer email already registered
    CustomerEmailExists = 5002,
    /// Role not found
    RoleNotFound = 5101,
    /// Role name already exists
    RoleNameExists = 5102,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Catalog
            ErrorCode::CityNotFound => "City not found",
            ErrorCode::CityNameExists => "City already exists",
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::RestaurantNameExists => "Restaurant already exists",
            ErrorCode::FoodCategoryNotFound => "Food category not found",
            ErrorCode::FoodCategoryNameExists => "Food category already exists",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemNameExists => "Menu item already exists",

            // Purchase
            ErrorCode::PurchaseNotFound => "Purchase not found",
            ErrorCode::NoItemsSelected => "No menu items were selected",
            ErrorCode::IncorrectDateFormat => "Timestamp has an incorrect format",
            ErrorCode::MergeFailed => "Failed to apply the update to the stored record",

            // Account
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerEmailExists => "Customer email already registered",
            ErrorCode::RoleNotFound => "Role not found",
            ErrorCode::RoleNameExists => "Role name already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Catalog
            3001 => Ok(ErrorCode::CityNotFound),
            3002 => Ok(ErrorCode::CityNameExists),
            3101 => Ok(ErrorCode::RestaurantNotFound),
            3102 => Ok(ErrorCode::RestaurantNameExists),
            3201 => Ok(ErrorCode::FoodCategoryNotFound),
            3202 => Ok(ErrorCode::FoodCategoryNameExists),
            3301 => Ok(ErrorCode::MenuItemNotFound),
            3302 => Ok(ErrorCode::MenuItemNameExists),

            // Purchase
            4001 => Ok(ErrorCode::PurchaseNotFound),
            4002 => Ok(ErrorCode::NoItemsSelected),
            4003 => Ok(ErrorCode::IncorrectDateFormat),
            4004 => Ok(ErrorCode::MergeFailed),

            // Account
            5001 => Ok(ErrorCode::CustomerNotFound),
            5002 => Ok(ErrorCode::CustomerEmailExists),
            5101 => Ok(ErrorCode::RoleNotFound),
            5102 => Ok(ErrorCode::RoleNameExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);

        // Catalog
        assert_eq!(ErrorCode::CityNotFound.code(), 3001);
        assert_eq!(ErrorCode::CityNameExists.code(), 3002);
        assert_eq!(ErrorCode::MenuItemNameExists.code(), 3302);

        // Purchase
        assert_eq!(ErrorCode::PurchaseNotFound.code(), 4001);
        assert_eq!(ErrorCode::NoItemsSelected.code(), 4002);
        assert_eq!(ErrorCode::IncorrectDateFormat.code(), 4003);

        // Account
        assert_eq!(ErrorCode::CustomerEmailExists.code(), 5002);
        assert_eq!(ErrorCode::RoleNameExists.code(), 5102);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0).unwrap(), ErrorCode::Success);
        assert_eq!(ErrorCode::try_from(3001).unwrap(), ErrorCode::CityNotFound);
        assert_eq!(
            ErrorCode::try_from(4003).unwrap(),
            ErrorCode::IncorrectDateFormat
        );
        assert_eq!(
            ErrorCode::try_from(5002).unwrap(),
            ErrorCode::CustomerEmailExists
        );
        assert_eq!(ErrorCode::try_from(9002).unwrap(), ErrorCode::DatabaseError);
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::CityNotFound.message(), "City not found");
        assert_eq!(
            ErrorCode::NoItemsSelected.message(),
            "No menu items were selected"
        );
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::CityNameExists).unwrap();
        assert_eq!(json, "3002");
    }

    #[test]
    fn test_deserialize_from_u16() {
        let code: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(code, ErrorCode::NoItemsSelected);

        let result: Result<ErrorCode, _> = serde_json::from_str("1234");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }
}
