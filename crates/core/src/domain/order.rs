//! Completed order snapshot.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::CartItem;
use crate::types::Money;

/// An immutable snapshot of a completed checkout.
///
/// Orders are created exactly once per successful checkout and appended to
/// the store's history; no API mutates or removes them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The cart lines as they were at checkout time.
    pub items: Vec<CartItem>,
    /// The cart total at checkout time.
    pub total: Money,
    /// Checkout date, already formatted for display (`d/m/YYYY`).
    pub date: String,
}

impl Order {
    /// Create an order snapshot.
    #[must_use]
    pub const fn new(items: Vec<CartItem>, total: Money, date: String) -> Self {
        Self { items, total, date }
    }
}

/// Format a date the way order history displays it: the es-CO short form
/// `d/m/YYYY`, without zero padding.
#[must_use]
pub fn format_order_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_order_date_unpadded() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_order_date(date), "5/1/2026");
    }

    #[test]
    fn test_format_order_date_two_digit_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_order_date(date), "31/12/2025");
    }
}
