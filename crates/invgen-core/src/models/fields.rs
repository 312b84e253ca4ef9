//! Invoice field models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw output of the pattern rules, one entry per field.
///
/// Every field is independently optional; a miss is expected, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldGuesses {
    /// Remainder of the first line labeled From/To/Name/Entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// First DD/MM/YYYY- or DD-MM-YYYY-shaped token anywhere in the text.
    ///
    /// Surfaced for inspection only; the draft date is always the current
    /// calendar date, never this token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_token: Option<String>,

    /// Numeric token (commas kept, two decimals) after a Total/Amount label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Remainder of the first line labeled Description/For.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldGuesses {
    /// How many of the four rules matched.
    pub fn coverage(&self) -> (usize, usize) {
        let filled = [
            self.entity.is_some(),
            self.date_token.is_some(),
            self.amount.is_some(),
            self.description.is_some(),
        ]
        .iter()
        .filter(|f| **f)
        .count();
        (filled, 4)
    }
}

/// Confirmed invoice fields, as they go into the renderer.
///
/// Before user correction these are the drafted values: guessed strings
/// (empty on a rule miss) and today's date. The amount stays a raw string
/// throughout; it is never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFields {
    /// Payer/payee name.
    pub entity: String,

    /// Transaction date.
    pub date: NaiveDate,

    /// Amount as entered, e.g. "1,234.56".
    pub amount: String,

    /// Free-form description.
    pub description: String,
}

impl InvoiceFields {
    /// The date formatted the way all three templates render it.
    pub fn date_display(&self) -> String {
        self.date.format("%d-%m-%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_counts_matched_rules() {
        let guesses = FieldGuesses {
            entity: Some("Acme".to_string()),
            amount: Some("100.00".to_string()),
            ..Default::default()
        };
        assert_eq!(guesses.coverage(), (2, 4));
        assert_eq!(FieldGuesses::default().coverage(), (0, 4));
    }

    #[test]
    fn date_display_is_day_first() {
        let fields = InvoiceFields {
            entity: "Acme".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            amount: "100.00".to_string(),
            description: "Widgets".to_string(),
        };
        assert_eq!(fields.date_display(), "02-01-2024");
    }
}
