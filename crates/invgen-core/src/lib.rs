//! Core library for invoice scan processing.
//!
//! This crate provides:
//! - Text source adapter (raster images and PDFs, embedded text or OCR)
//! - Rule-based field guessing (entity, date token, amount, description)
//! - Correction contract for user overrides
//! - Fixed-template PDF rendering (Simple, Modern, Minimal)
//! - Output dispatch with suggested file names

pub mod correction;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod source;

pub use correction::Corrections;
pub use error::{InvgenError, RenderError, Result, SourceError};
pub use extract::{ExtractionResult, FieldParser};
pub use models::config::InvgenConfig;
pub use models::fields::{FieldGuesses, InvoiceFields};
pub use output::{PDF_CONTENT_TYPE, RenderedInvoice, suggested_filename};
pub use pipeline::{extract_fields, render_invoice};
pub use render::{InvoiceStyle, Layout, build_layout};
pub use source::{ExtractedText, MediaType, UploadedArtifact};

/// Re-export the OCR abstraction.
pub use invgen_ocr::{MockBackend, NullBackend, OcrBackend};

#[cfg(feature = "tesseract")]
pub use invgen_ocr::TesseractBackend;
