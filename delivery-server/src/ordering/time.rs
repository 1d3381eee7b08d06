//! Order timestamp format
//!
//! Every purchase timestamp on the wire uses the same fixed minute
//! precision format. Parsing and formatting are pure functions over
//! the constant pattern.

use chrono::NaiveDateTime;

use super::error::OrderingError;

/// chrono strftime pattern for order timestamps
pub const ORDER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Human-facing spelling of the pattern, used in error messages
pub const ORDER_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm";

/// Parse an order timestamp from its wire form
pub fn parse_order_time(text: &str) -> Result<NaiveDateTime, OrderingError> {
    NaiveDateTime::parse_from_str(text, ORDER_TIME_FORMAT).map_err(|_| {
        OrderingError::IncorrectDateFormat {
            text: text.to_string(),
        }
    })
}

/// Format an order timestamp into its wire form
pub fn format_order_time(time: NaiveDateTime) -> String {
    time.format(ORDER_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let parsed = parse_order_time("2022-06-18 14:30").unwrap();
        assert_eq!(format_order_time(parsed), "2022-06-18 14:30");
    }

    #[test]
    fn test_parse_rejects_time_only() {
        let err = parse_order_time("16:45:30").unwrap_err();
        assert_eq!(
            err,
            OrderingError::IncorrectDateFormat {
                text: "16:45:30".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_seconds() {
        assert!(parse_order_time("2022-06-18 14:30:00").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_order_time("not a date").is_err());
        assert!(parse_order_time("").is_err());
        assert!(parse_order_time("2022/06/18 14:30").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let time = chrono::NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_order_time(time), "2023-01-05 09:05");
    }
}
