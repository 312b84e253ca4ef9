//! Draft assembly from the pattern rules.

use std::time::Instant;

use chrono::Local;
use tracing::debug;

use crate::models::fields::{FieldGuesses, InvoiceFields};

use super::rules::{extract_amount, extract_date_token, extract_description, extract_entity};

/// Result of running the rules over extracted text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Pre-filled correction form values.
    pub draft: InvoiceFields,
    /// Raw rule output, before defaulting.
    pub guesses: FieldGuesses,
    /// The text the rules ran over.
    pub raw_text: String,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Applies the four field rules and assembles the correction-form draft.
///
/// Rules run independently; a line may feed several fields. Unmatched
/// fields draft as empty strings. The date is drafted as the current
/// calendar date: a date token found in the text is surfaced in the
/// guesses but does not reach the draft.
pub struct FieldParser;

impl FieldParser {
    pub fn new() -> Self {
        Self
    }

    /// Run all rules over the text and build the draft.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        let guesses = FieldGuesses {
            entity: extract_entity(text),
            date_token: extract_date_token(text),
            amount: extract_amount(text),
            description: extract_description(text),
        };

        let (filled, total) = guesses.coverage();
        debug!(filled, total, "Rule coverage");
        if let Some(token) = &guesses.date_token {
            debug!(token = %token, "Date token present in source text");
        }

        let draft = InvoiceFields {
            entity: guesses.entity.clone().unwrap_or_default(),
            date: Local::now().date_naive(),
            amount: guesses.amount.clone().unwrap_or_default(),
            description: guesses.description.clone().unwrap_or_default(),
        };

        ExtractionResult {
            draft,
            guesses,
            raw_text: text.to_string(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_typical_scan() {
        let text = "INVOICE\nFrom: Acme Corp\nDate: 15/01/2024\nTotal: $1,234.56\nFor: consulting services\n";

        let result = FieldParser::new().parse(text);

        assert_eq!(result.guesses.entity.as_deref(), Some("Acme Corp"));
        assert_eq!(result.guesses.date_token.as_deref(), Some("15/01/2024"));
        assert_eq!(result.guesses.amount.as_deref(), Some("1,234.56"));
        assert_eq!(
            result.guesses.description.as_deref(),
            Some("consulting services")
        );

        assert_eq!(result.draft.entity, "Acme Corp");
        assert_eq!(result.draft.amount, "1,234.56");
        assert_eq!(result.draft.description, "consulting services");
    }

    #[test]
    fn entity_and_description_are_independent_of_line_order() {
        let forward = FieldParser::new().parse("From: Acme Corp\nFor: consulting services");
        let reversed = FieldParser::new().parse("For: consulting services\nFrom: Acme Corp");

        for result in [forward, reversed] {
            assert_eq!(result.guesses.entity.as_deref(), Some("Acme Corp"));
            assert_eq!(
                result.guesses.description.as_deref(),
                Some("consulting services")
            );
        }
    }

    #[test]
    fn draft_date_is_today_even_when_text_has_a_date() {
        let result = FieldParser::new().parse("Date: 15/01/2019\nTotal: $5.00");

        assert_eq!(result.guesses.date_token.as_deref(), Some("15/01/2019"));
        assert_eq!(result.draft.date, Local::now().date_naive());
    }

    #[test]
    fn unmatched_fields_draft_blank() {
        let result = FieldParser::new().parse("nothing recognizable here");

        assert_eq!(result.draft.entity, "");
        assert_eq!(result.draft.amount, "");
        assert_eq!(result.draft.description, "");
        assert_eq!(result.guesses.coverage(), (0, 4));
    }
}
