//! Date token extraction.

use super::FieldExtractor;
use super::patterns::DATE_TOKEN;

/// Date token extractor.
///
/// Finds DD/MM/YYYY or DD-MM-YYYY shaped tokens anywhere in the text. The
/// day and month are not range-checked; "99-99-2024" is a valid token. The
/// token is informational only: the drafted date is always the current
/// calendar date, regardless of what appears in the text.
pub struct DateTokenExtractor;

impl DateTokenExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateTokenExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateTokenExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DATE_TOKEN.captures(text).map(|caps| caps[1].to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_TOKEN
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Extract the first date-shaped token from text.
pub fn extract_date_token(text: &str) -> Option<String> {
    DateTokenExtractor::new().extract(text)
}
