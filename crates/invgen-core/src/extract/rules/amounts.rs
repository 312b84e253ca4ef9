//! Amount extraction.

use super::FieldExtractor;
use super::patterns::AMOUNT_LINE;

/// Amount field extractor.
///
/// Matches a Total or Amount label followed by an optional dollar sign and
/// a numeric token with exactly two decimals. The token is kept as the raw
/// string, thousands separators included; it is never parsed as a number.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        AMOUNT_LINE
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT_LINE
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }
}

/// Extract the first labeled amount token from text.
pub fn extract_amount(text: &str) -> Option<String> {
    AmountExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_with_thousands_separator() {
        assert_eq!(
            extract_amount("Total: $1,234.56"),
            Some("1,234.56".to_string())
        );
    }

    #[test]
    fn amount_label_without_dollar_sign() {
        assert_eq!(extract_amount("Amount: 100.00"), Some("100.00".to_string()));
    }

    #[test]
    fn colon_and_whitespace_are_optional() {
        assert_eq!(extract_amount("Total $99.95"), Some("99.95".to_string()));
        assert_eq!(extract_amount("Amount:42.00"), Some("42.00".to_string()));
    }

    #[test]
    fn label_is_case_sensitive() {
        assert_eq!(extract_amount("total: $1,234.56"), None);
        assert_eq!(extract_amount("AMOUNT: 5.00"), None);
    }

    #[test]
    fn token_needs_two_decimals() {
        assert_eq!(extract_amount("Total: $1234"), None);
        assert_eq!(extract_amount("Total: $12.5"), None);
    }

    #[test]
    fn no_label_no_match() {
        assert_eq!(extract_amount("1,234.56 due"), None);
    }
}
