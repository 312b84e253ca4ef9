//! CLI subcommands and shared helpers.

pub mod batch;
pub mod config;
pub mod extract;
pub mod generate;

use std::path::Path;

use invgen_core::{InvgenConfig, InvoiceStyle, MediaType, OcrBackend, UploadedArtifact};

/// Style selector exposed on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StyleArg {
    /// Centered INVOICE heading with labeled lines
    Simple,
    /// Bold summary heading over an indented block
    Modern,
    /// Monospaced one-liner and the bare description
    Minimal,
}

impl From<StyleArg> for InvoiceStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Simple => InvoiceStyle::Simple,
            StyleArg::Modern => InvoiceStyle::Modern,
            StyleArg::Minimal => InvoiceStyle::Minimal,
        }
    }
}

/// Load configuration from an explicit path or fall back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<InvgenConfig> {
    match config_path {
        Some(path) => Ok(InvgenConfig::from_file(Path::new(path))?),
        None => Ok(InvgenConfig::default()),
    }
}

/// Read an input file into an artifact, inferring the media type from the
/// file extension.
pub(crate) fn read_artifact(path: &Path) -> anyhow::Result<UploadedArtifact> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let media_type = MediaType::from_extension(extension).ok_or_else(|| {
        anyhow::anyhow!(
            "Unsupported file format: {} (expected png, jpg, jpeg, or pdf)",
            extension
        )
    })?;

    let data = std::fs::read(path)?;
    Ok(UploadedArtifact::new(data, media_type))
}

/// Build the OCR backend for this run.
///
/// With `text_only` set, OCR is disabled outright: inputs without embedded
/// text fail instead of being scanned.
#[cfg(feature = "tesseract")]
pub(crate) fn make_backend(config: &InvgenConfig, text_only: bool) -> Box<dyn OcrBackend> {
    if text_only {
        return Box::new(invgen_core::NullBackend);
    }

    let mut backend = invgen_core::TesseractBackend::new().with_lang(config.ocr.lang.as_str());
    if let Some(path) = &config.ocr.data_path {
        backend = backend.with_data_path(path);
    }
    Box::new(backend)
}

/// Without the `tesseract` feature no engine is linked; every OCR attempt
/// reports that the backend is unavailable.
#[cfg(not(feature = "tesseract"))]
pub(crate) fn make_backend(_config: &InvgenConfig, _text_only: bool) -> Box<dyn OcrBackend> {
    Box::new(invgen_core::NullBackend)
}
