//! Input validation helpers
//!
//! Rules that the derive-level validators cannot express: the password
//! policy and the decimal minimums on menu items.

use rust_decimal::Decimal;

use crate::utils::AppError;

/// Minimum menu item price, in whole currency units
pub const MIN_MENU_ITEM_PRICE: Decimal = Decimal::ONE;

/// Minimum preparation time, in minutes
pub const MIN_TIME_TO_COOK: Decimal = Decimal::TEN;

/// Maximum preparation time, in minutes (one day)
pub const MAX_TIME_TO_COOK: Decimal = Decimal::from_parts(1440, 0, 0, false, 0);

/// Minimum password length before hashing
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate the customer password policy: at least 8 characters with
/// at least one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err(AppError::validation(
            "password must contain at least one letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "password must contain at least one digit",
        ));
    }
    Ok(())
}

/// Validate that a menu item price is at least one currency unit
pub fn validate_menu_item_price(price: Decimal) -> Result<(), AppError> {
    if price < MIN_MENU_ITEM_PRICE {
        return Err(AppError::validation(format!(
            "price must be at least {MIN_MENU_ITEM_PRICE}"
        )));
    }
    Ok(())
}

/// Validate that a preparation time is between ten minutes and a day
pub fn validate_time_to_cook(minutes: Decimal) -> Result<(), AppError> {
    if minutes < MIN_TIME_TO_COOK {
        return Err(AppError::validation(format!(
            "time_to_cook must be at least {MIN_TIME_TO_COOK} minutes"
        )));
    }
    if minutes > MAX_TIME_TO_COOK {
        return Err(AppError::validation(format!(
            "time_to_cook must be at most {MAX_TIME_TO_COOK} minutes"
        )));
    }
    Ok(())
}
