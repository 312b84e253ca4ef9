//! OCR backend abstraction for invgen.
//!
//! This crate provides a unified interface for turning a page image into
//! recognized text:
//! - `TesseractBackend` via leptess for native platforms (feature `tesseract`)
//! - `MockBackend` for exercising the pipeline in tests
//! - `NullBackend` for text-only runs where OCR must never be invoked

mod backend;
mod error;

pub use backend::{MockBackend, NullBackend, OcrBackend};
pub use error::OcrError;

#[cfg(feature = "tesseract")]
pub use backend::tesseract::TesseractBackend;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;
