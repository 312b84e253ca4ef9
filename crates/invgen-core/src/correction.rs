//! Correction form contract.
//!
//! The interactive step between extraction and rendering: the drafted
//! values are shown to the user, and whatever comes back is final. No
//! validation or normalization happens here; a date override is already
//! syntactically valid by construction of its input control.

use chrono::NaiveDate;

use crate::models::fields::InvoiceFields;

/// User overrides for the drafted fields. `None` keeps the drafted value.
#[derive(Debug, Clone, Default)]
pub struct Corrections {
    pub entity: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl Corrections {
    /// Apply the overrides to a draft, producing the confirmed fields.
    pub fn apply(self, draft: InvoiceFields) -> InvoiceFields {
        InvoiceFields {
            entity: self.entity.unwrap_or(draft.entity),
            date: self.date.unwrap_or(draft.date),
            amount: self.amount.unwrap_or(draft.amount),
            description: self.description.unwrap_or(draft.description),
        }
    }

    /// Whether any override is present.
    pub fn is_empty(&self) -> bool {
        self.entity.is_none()
            && self.date.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> InvoiceFields {
        InvoiceFields {
            entity: "Acme".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            amount: "100.00".to_string(),
            description: "Widgets".to_string(),
        }
    }

    #[test]
    fn empty_corrections_keep_the_draft() {
        let confirmed = Corrections::default().apply(draft());
        assert_eq!(confirmed, draft());
    }

    #[test]
    fn overrides_replace_only_their_field() {
        let corrections = Corrections {
            amount: Some("250.00".to_string()),
            ..Default::default()
        };
        let confirmed = corrections.apply(draft());

        assert_eq!(confirmed.amount, "250.00");
        assert_eq!(confirmed.entity, "Acme");
        assert_eq!(confirmed.description, "Widgets");
    }

    #[test]
    fn values_pass_through_unvalidated() {
        let corrections = Corrections {
            amount: Some("not a number".to_string()),
            ..Default::default()
        };
        assert_eq!(corrections.apply(draft()).amount, "not a number");
    }
}
