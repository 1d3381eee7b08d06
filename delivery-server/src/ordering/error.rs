//! Domain error types for the ordering engine

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::time::ORDER_TIME_PATTERN;

/// Entity kinds the ordering engine reports errors about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    City,
    Restaurant,
    FoodCategory,
    MenuItem,
    Customer,
    Role,
    Purchase,
}

impl EntityKind {
    /// Human-readable label used in error messages
    pub const fn label(&self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Restaurant => "Restaurant",
            Self::FoodCategory => "Food category",
            Self::MenuItem => "Menu item",
            Self::Customer => "Customer",
            Self::Role => "Role",
            Self::Purchase => "Purchase",
        }
    }

    /// Error code for a missing entity of this kind
    pub const fn not_found_code(&self) -> ErrorCode {
        match self {
            Self::City => ErrorCode::CityNotFound,
            Self::Restaurant => ErrorCode::RestaurantNotFound,
            Self::FoodCategory => ErrorCode::FoodCategoryNotFound,
            Self::MenuItem => ErrorCode::MenuItemNotFound,
            Self::Customer => ErrorCode::CustomerNotFound,
            Self::Role => ErrorCode::RoleNotFound,
            Self::Purchase => ErrorCode::PurchaseNotFound,
        }
    }

    /// Error code for a duplicate uniqueness key of this kind
    pub const fn exists_code(&self) -> ErrorCode {
        match self {
            Self::City => ErrorCode::CityNameExists,
            Self::Restaurant => ErrorCode::RestaurantNameExists,
            Self::FoodCategory => ErrorCode::FoodCategoryNameExists,
            Self::MenuItem => ErrorCode::MenuItemNameExists,
            Self::Customer => ErrorCode::CustomerEmailExists,
            Self::Role => ErrorCode::RoleNameExists,
            Self::Purchase => ErrorCode::AlreadyExists,
        }
    }
}

/// Errors produced by the ordering engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderingError {
    /// The uniqueness key (name or email) is already taken
    #[error("{} '{key}' already exists in the db", kind.label())]
    AlreadyExists { kind: EntityKind, key: String },

    /// A referenced entity does not exist
    #[error("{} with the id '{id}' could not be found", kind.label())]
    NotFound { kind: EntityKind, id: String },

    /// A timestamp did not match the fixed order time format
    #[error("the date '{text}' should be in the format: {ORDER_TIME_PATTERN}")]
    IncorrectDateFormat { text: String },

    /// A purchase was placed with an empty menu item list
    #[error("no menu items were selected for the purchase")]
    NoItemsSelected,

    /// The cook time pushes the delivery estimate past the
    /// representable date range
    #[error("a cook time of '{minutes}' minutes puts the delivery estimate out of range")]
    EstimateOutOfRange { minutes: String },

    /// A patch field could not be mapped onto the stored record
    #[error("failed to apply the update: {reason}")]
    MergeFailed { reason: String },
}

impl From<OrderingError> for AppError {
    fn from(err: OrderingError) -> Self {
        let message = err.to_string();
        match err {
            OrderingError::AlreadyExists { kind, key } => {
                AppError::with_message(kind.exists_code(), message).with_detail("key", key)
            }
            OrderingError::NotFound { kind, id } => {
                AppError::with_message(kind.not_found_code(), message).with_detail("id", id)
            }
            OrderingError::IncorrectDateFormat { text } => {
                AppError::with_message(ErrorCode::IncorrectDateFormat, message)
                    .with_detail("value", text)
                    .with_detail("expected", ORDER_TIME_PATTERN)
            }
            OrderingError::NoItemsSelected => {
                AppError::with_message(ErrorCode::NoItemsSelected, message)
            }
            OrderingError::EstimateOutOfRange { minutes } => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
                    .with_detail("minutes", minutes)
            }
            OrderingError::MergeFailed { .. } => {
                AppError::with_message(ErrorCode::MergeFailed, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_already_exists_message() {
        let err = OrderingError::AlreadyExists {
            kind: EntityKind::City,
            key: "Madrid".to_string(),
        };
        assert_eq!(err.to_string(), "City 'Madrid' already exists in the db");
    }

    #[test]
    fn test_incorrect_date_format_message() {
        let err = OrderingError::IncorrectDateFormat {
            text: "16:45:30".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the date '16:45:30' should be in the format: yyyy-MM-dd HH:mm"
        );
    }

    #[test]
    fn test_conversion_to_app_error() {
        let err: AppError = OrderingError::AlreadyExists {
            kind: EntityKind::Restaurant,
            key: "Trattoria".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::RestaurantNameExists);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err: AppError = OrderingError::NotFound {
            kind: EntityKind::MenuItem,
            id: "menu_item:abc".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err: AppError = OrderingError::NoItemsSelected.into();
        assert_eq!(err.code, ErrorCode::NoItemsSelected);
        assert_eq!(err.http_status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: AppError = OrderingError::EstimateOutOfRange {
            minutes: "1000000000000".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }
}
