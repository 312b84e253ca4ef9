//! Error types for the OCR layer.

use thiserror::Error;

/// Errors that can occur while recognizing text in an image.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to initialize the OCR engine.
    #[error("failed to initialize OCR engine: {0}")]
    Init(String),

    /// Failed to encode or decode the input image.
    #[error("failed to prepare image: {0}")]
    Image(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// No OCR backend is available in this build.
    #[error("no OCR backend available (build with the `tesseract` feature)")]
    NotAvailable,
}
