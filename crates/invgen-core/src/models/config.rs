//! Configuration structures for the pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the invgen pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvgenConfig {
    /// OCR configuration.
    pub ocr: OcrSettings,

    /// PDF source configuration.
    pub pdf: PdfSettings,
}

/// OCR engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// Recognition language passed to the engine.
    pub lang: String,

    /// Explicit tessdata directory, if the system default is not used.
    pub data_path: Option<PathBuf>,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            data_path: None,
        }
    }
}

/// PDF source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// Try embedded text before falling back to per-page OCR.
    pub prefer_embedded_text: bool,

    /// Minimum non-whitespace characters for embedded text to count.
    pub min_text_length: usize,

    /// Maximum pages to OCR (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            prefer_embedded_text: true,
            min_text_length: 50,
            max_pages: 0,
        }
    }
}

impl InvgenConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let config = InvgenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: InvgenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ocr.lang, "eng");
        assert!(parsed.pdf.prefer_embedded_text);
        assert_eq!(parsed.pdf.min_text_length, 50);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let parsed: InvgenConfig = serde_json::from_str(r#"{"ocr":{"lang":"deu"}}"#).unwrap();
        assert_eq!(parsed.ocr.lang, "deu");
        assert_eq!(parsed.pdf.max_pages, 0);
    }
}
