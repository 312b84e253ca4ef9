//! Tesseract OCR backend via leptess.

use std::io::Cursor;
use std::path::PathBuf;

use image::DynamicImage;
use leptess::LepTess;
use tracing::debug;

use super::OcrBackend;
use crate::{OcrError, Result};

/// OCR backend driving a system Tesseract installation through leptess.
///
/// A fresh `LepTess` instance is created per page; leptess handles are not
/// `Sync`, and initialization is cheap next to recognition.
pub struct TesseractBackend {
    data_path: Option<PathBuf>,
    lang: String,
}

impl TesseractBackend {
    /// Create a backend using the default tessdata location and language.
    pub fn new() -> Self {
        Self {
            data_path: None,
            lang: "eng".to_string(),
        }
    }

    /// Set the recognition language (e.g. "eng", "deu").
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set an explicit tessdata directory.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }
}

impl Default for TesseractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrBackend for TesseractBackend {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        // leptess reads encoded bytes, so round-trip through an in-memory PNG.
        let mut encoded = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
            .map_err(|e| OcrError::Image(e.to_string()))?;

        let data_path = self.data_path.as_ref().and_then(|p| p.to_str());
        let mut engine =
            LepTess::new(data_path, &self.lang).map_err(|e| OcrError::Init(e.to_string()))?;

        engine
            .set_image_from_mem(&encoded)
            .map_err(|e| OcrError::Image(e.to_string()))?;

        let text = engine
            .get_utf8_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;

        debug!(
            lang = %self.lang,
            chars = text.len(),
            "Tesseract recognition complete"
        );

        Ok(text)
    }
}
