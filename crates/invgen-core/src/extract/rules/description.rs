//! Description extraction.

use super::FieldExtractor;
use super::patterns::DESCRIPTION_LINE;

/// Description field extractor.
///
/// Matches a line labeled Description or For (exact case) and takes the
/// trimmed remainder of that line.
pub struct DescriptionExtractor;

impl DescriptionExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DescriptionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DescriptionExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DESCRIPTION_LINE
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DESCRIPTION_LINE
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }
}

/// Extract the first description from text.
pub fn extract_description(text: &str) -> Option<String> {
    DescriptionExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_for_line() {
        assert_eq!(
            extract_description("For: consulting services"),
            Some("consulting services".to_string())
        );
    }

    #[test]
    fn labeled_description_line() {
        assert_eq!(
            extract_description("Description: 10 boxes of widgets"),
            Some("10 boxes of widgets".to_string())
        );
    }

    #[test]
    fn label_is_case_sensitive() {
        assert_eq!(extract_description("description: widgets"), None);
        assert_eq!(extract_description("FOR: widgets"), None);
    }

    #[test]
    fn remainder_is_trimmed() {
        assert_eq!(
            extract_description("For:   monthly retainer  "),
            Some("monthly retainer".to_string())
        );
    }

    #[test]
    fn no_label_no_match() {
        assert_eq!(extract_description("Invoice #42"), None);
    }
}
