use crate::error::{PillboxError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The date pattern every textual backend agrees on.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One inventory entry.
///
/// `Medicine` is a plain value: updates replace the whole record rather than
/// mutating fields in place, and every read accessor on the inventory hands
/// out clones. `name` is the intended identifier within a collection, but
/// only the relational backend enforces uniqueness (primary key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub expiry_date: NaiveDate,
    pub quantity: i32,
}

impl Medicine {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        expiry_date: NaiveDate,
        quantity: i32,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            expiry_date,
            quantity,
        }
    }

    /// Parse an expiry date from its canonical `YYYY-MM-DD` form.
    pub fn parse_expiry(text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| PillboxError::Parse {
            field: "expiry date",
            value: text.to_string(),
        })
    }

    /// Parse a quantity from decimal text. Negative values pass through.
    pub fn parse_quantity(text: &str) -> Result<i32> {
        text.trim().parse().map_err(|_| PillboxError::Parse {
            field: "quantity",
            value: text.to_string(),
        })
    }

    /// The expiry date in its canonical `YYYY-MM-DD` form.
    pub fn format_expiry(&self) -> String {
        self.expiry_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Medicine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (expires {}, quantity {})",
            self.name,
            self.dosage,
            self.format_expiry(),
            self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_date() {
        let date = Medicine::parse_expiry("2025-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn rejects_non_canonical_date() {
        let err = Medicine::parse_expiry("2024/13/40").unwrap_err();
        assert!(err.to_string().contains("expiry date"));
    }

    #[test]
    fn rejects_out_of_range_date() {
        assert!(Medicine::parse_expiry("2024-13-40").is_err());
    }

    #[test]
    fn quantity_accepts_negative_values() {
        assert_eq!(Medicine::parse_quantity("-3").unwrap(), -3);
    }

    #[test]
    fn quantity_rejects_non_numeric_text() {
        let err = Medicine::parse_quantity("a lot").unwrap_err();
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn date_formatting_is_stable() {
        let med = Medicine::new(
            "Aspirin",
            "100mg",
            Medicine::parse_expiry("2026-02-28").unwrap(),
            12,
        );
        assert_eq!(med.format_expiry(), "2026-02-28");
    }

    #[test]
    fn display_renders_one_line() {
        let med = Medicine::new(
            "Ibuprofen",
            "200mg",
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            5,
        );
        assert_eq!(
            med.to_string(),
            "Ibuprofen 200mg (expires 2025-06-30, quantity 5)"
        );
    }
}
