//! OCR backend implementations.

#[cfg(feature = "tesseract")]
pub mod tesseract;

use std::collections::VecDeque;
use std::sync::Mutex;

use image::DynamicImage;

use crate::{OcrError, Result};

/// Trait for OCR backends.
///
/// A backend takes one decoded page image and returns the recognized text
/// for that page. Callers handle multi-page inputs by invoking `recognize`
/// once per page.
pub trait OcrBackend: Send + Sync {
    /// Recognize text in the given image.
    fn recognize(&self, image: &DynamicImage) -> Result<String>;
}

/// Backend that replays scripted text, for exercising the pipeline in tests
/// without an OCR engine installed.
///
/// Each call to `recognize` pops the next scripted page; once the script is
/// exhausted, the last entry is repeated.
pub struct MockBackend {
    pages: Mutex<VecDeque<String>>,
    last: String,
}

impl MockBackend {
    /// Backend that returns the same text for every page.
    pub fn fixed(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            pages: Mutex::new(VecDeque::new()),
            last: text,
        }
    }

    /// Backend that returns one scripted text per page, in order.
    pub fn pages(pages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let pages: VecDeque<String> = pages.into_iter().map(Into::into).collect();
        let last = pages.back().cloned().unwrap_or_default();
        Self {
            pages: Mutex::new(pages),
            last,
        }
    }
}

impl OcrBackend for MockBackend {
    fn recognize(&self, _image: &DynamicImage) -> Result<String> {
        let mut pages = self
            .pages
            .lock()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;
        Ok(pages.pop_front().unwrap_or_else(|| self.last.clone()))
    }
}

/// Backend that refuses to run.
///
/// Used for text-only processing, where reaching OCR at all means the input
/// had no embedded text and the run must fail instead of silently scanning.
pub struct NullBackend;

impl OcrBackend for NullBackend {
    fn recognize(&self, _image: &DynamicImage) -> Result<String> {
        Err(OcrError::NotAvailable)
    }
}
