//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 3xxx: Catalog errors
/// - 4xxx: Purchase errors
/// - 5xxx: Account errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Catalog errors (3xxx)
    Catalog,
    /// Purchase errors (4xxx)
    Purchase,
    /// Account errors (5xxx)
    Account,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..3000 => Self::General,
            3000..4000 => Self::Catalog,
            4000..5000 => Self::Purchase,
            5000..6000 => Self::Account,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Catalog => "catalog",
            Self::Purchase => "purchase",
            Self::Account => "account",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Catalog);
        assert_eq!(ErrorCategory::from_code(3302), ErrorCategory::Catalog);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Purchase);
        assert_eq!(ErrorCategory::from_code(5102), ErrorCategory::Account);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::CityNotFound.category(), ErrorCategory::Catalog);
        assert_eq!(
            ErrorCode::NoItemsSelected.category(),
            ErrorCategory::Purchase
        );
        assert_eq!(
            ErrorCode::CustomerNotFound.category(),
            ErrorCategory::Account
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Catalog;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"catalog\"");

        let category: ErrorCategory = serde_json::from_str("\"purchase\"").unwrap();
        assert_eq!(category, ErrorCategory::Purchase);
    }
}
