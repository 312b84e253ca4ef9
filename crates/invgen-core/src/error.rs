//! Error types for the invgen-core library.

use thiserror::Error;

/// Main error type for the invgen library.
#[derive(Error, Debug)]
pub enum InvgenError {
    /// Source artifact could not be turned into text.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Document rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while reading an uploaded artifact.
///
/// Any failure here is blocking: no partial text is ever produced.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to parse the PDF structure.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// A page carried no decodable raster image to run OCR on.
    #[error("no page image found on page {0}")]
    PageImage(u32),

    /// Failed to decode a raster artifact or embedded page image.
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    /// Failed to extract embedded text from a PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The OCR engine failed.
    #[error("OCR error: {0}")]
    Ocr(#[from] invgen_ocr::OcrError),

    /// The declared media type is not one of image/png, image/jpeg,
    /// application/pdf.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Errors raised while generating the output document.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The layout cannot be paginated.
    #[error("invalid layout: {0}")]
    Layout(String),
}

/// Result type for the invgen library.
pub type Result<T> = std::result::Result<T, InvgenError>;
