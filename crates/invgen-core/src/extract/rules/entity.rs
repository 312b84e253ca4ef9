//! Entity (payer/payee name) extraction.

use super::FieldExtractor;
use super::patterns::ENTITY_LINE;

/// Entity field extractor.
///
/// Matches a line labeled From, To, Name, or Entity (any case) and takes
/// the trimmed remainder of that line.
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EntityExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ENTITY_LINE
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ENTITY_LINE
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }
}

/// Extract the first entity name from text.
pub fn extract_entity(text: &str) -> Option<String> {
    EntityExtractor::new().extract(text)
}
