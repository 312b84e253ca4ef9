//! Rule-based field extractors.
//!
//! Each rule is a pure function from text to an optional field value. Rules
//! are independent and non-exclusive: one line may satisfy several of them,
//! and a miss in one never affects another.

pub mod amounts;
pub mod dates;
pub mod description;
pub mod entity;
pub mod patterns;

pub use amounts::{AmountExtractor, extract_amount};
pub use dates::{DateTokenExtractor, extract_date_token};
pub use description::{DescriptionExtractor, extract_description};
pub use entity::{EntityExtractor, extract_entity};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first match from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all matches from text.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
