//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::CityNotFound
            | Self::RestaurantNotFound
            | Self::FoodCategoryNotFound
            | Self::MenuItemNotFound
            | Self::PurchaseNotFound
            | Self::CustomerNotFound
            | Self::RoleNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::CityNameExists
            | Self::RestaurantNameExists
            | Self::FoodCategoryNameExists
            | Self::MenuItemNameExists
            | Self::CustomerEmailExists
            | Self::RoleNameExists => StatusCode::CONFLICT,

            // 422 Unprocessable Entity (well-formed request, unprocessable content)
            Self::IncorrectDateFormat | Self::NoItemsSelected => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::MergeFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
