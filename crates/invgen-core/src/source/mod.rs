//! Text source adapter: uploaded artifact to extracted text.

mod pdf;

pub use pdf::PdfSource;

use image::DynamicImage;
use invgen_ocr::OcrBackend;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::models::config::InvgenConfig;

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Declared media type of an uploaded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// image/png
    Png,
    /// image/jpeg
    Jpeg,
    /// application/pdf
    Pdf,
}

impl MediaType {
    /// Parse a MIME string.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Infer from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// The canonical MIME string.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Pdf => "application/pdf",
        }
    }
}

/// An uploaded invoice scan, owned by a single pipeline pass.
#[derive(Debug, Clone)]
pub struct UploadedArtifact {
    /// Raw file bytes.
    pub data: Vec<u8>,
    /// Declared media type.
    pub media_type: MediaType,
}

impl UploadedArtifact {
    pub fn new(data: Vec<u8>, media_type: MediaType) -> Self {
        Self { data, media_type }
    }
}

/// Text recovered from an artifact, one OCR pass per page in page order.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Full text; pages are joined with a single newline.
    pub text: String,
    /// Number of source pages that contributed.
    pub page_count: u32,
}

impl ExtractedText {
    /// Iterate over the lines of the text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Turn an uploaded artifact into text.
///
/// Raster images are recognized directly. PDFs use embedded text when present
/// and sufficient (per `config.pdf`), otherwise each page's scan image is
/// recognized independently and the page texts are joined in page order.
/// Any parse, decode, or OCR failure aborts the whole operation.
pub fn extract_text(
    artifact: &UploadedArtifact,
    config: &InvgenConfig,
    ocr: &dyn OcrBackend,
) -> Result<ExtractedText> {
    match artifact.media_type {
        MediaType::Png | MediaType::Jpeg => {
            let image = image::load_from_memory(&artifact.data)
                .map_err(|e| SourceError::ImageDecode(e.to_string()))?;
            debug!(
                width = image.width(),
                height = image.height(),
                "Decoded raster artifact"
            );
            let text = ocr.recognize(&image)?;
            Ok(ExtractedText {
                text,
                page_count: 1,
            })
        }
        MediaType::Pdf => extract_pdf_text(&artifact.data, config, ocr),
    }
}

fn extract_pdf_text(
    data: &[u8],
    config: &InvgenConfig,
    ocr: &dyn OcrBackend,
) -> Result<ExtractedText> {
    let source = PdfSource::load(data)?;
    let page_count = source.page_count();
    debug!(pages = page_count, "Loaded PDF artifact");

    if config.pdf.prefer_embedded_text {
        if let Some(text) = source.embedded_text(config.pdf.min_text_length)? {
            info!(chars = text.len(), "Using embedded PDF text");
            return Ok(ExtractedText { text, page_count });
        }
    }

    let limit = if config.pdf.max_pages == 0 {
        page_count
    } else {
        page_count.min(config.pdf.max_pages as u32)
    };

    let mut pages = Vec::with_capacity(limit as usize);
    for page in 1..=limit {
        pages.push(source.page_image(page)?);
    }

    let text = ocr_pages(&pages, ocr)?;
    info!(pages = limit, chars = text.len(), "OCR complete");

    Ok(ExtractedText {
        text,
        page_count: limit,
    })
}

/// Recognize a sequence of page images and join the results with newlines,
/// preserving page order.
fn ocr_pages(pages: &[DynamicImage], ocr: &dyn OcrBackend) -> Result<String> {
    let mut texts = Vec::with_capacity(pages.len());
    for (idx, page) in pages.iter().enumerate() {
        let text = ocr.recognize(page)?;
        debug!(page = idx + 1, chars = text.len(), "Recognized page");
        texts.push(text);
    }
    Ok(texts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use invgen_ocr::MockBackend;

    #[test]
    fn media_type_from_mime() {
        assert_eq!(MediaType::from_mime("image/png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_mime("IMAGE/JPEG"), Some(MediaType::Jpeg));
        assert_eq!(
            MediaType::from_mime("application/pdf"),
            Some(MediaType::Pdf)
        );
        assert_eq!(MediaType::from_mime("text/plain"), None);
    }

    #[test]
    fn media_type_from_extension() {
        assert_eq!(MediaType::from_extension("png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_extension(".JPG"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_extension("pdf"), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_extension("tiff"), None);
    }

    #[test]
    fn pages_join_in_order() {
        let backend = MockBackend::pages(["first page", "second page"]);
        let pages = vec![DynamicImage::new_rgb8(4, 4), DynamicImage::new_rgb8(4, 4)];

        let text = ocr_pages(&pages, &backend).unwrap();
        assert_eq!(text, "first page\nsecond page");
    }

    #[test]
    fn ocr_failure_yields_no_partial_text() {
        let backend = invgen_ocr::NullBackend;
        let pages = vec![DynamicImage::new_rgb8(4, 4)];

        assert!(matches!(
            ocr_pages(&pages, &backend),
            Err(SourceError::Ocr(_))
        ));
    }

    #[test]
    fn garbage_pdf_bytes_fail() {
        let artifact = UploadedArtifact::new(b"this is not a pdf".to_vec(), MediaType::Pdf);
        let result = extract_text(
            &artifact,
            &InvgenConfig::default(),
            &MockBackend::fixed("unused"),
        );
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[test]
    fn garbage_image_bytes_fail() {
        let artifact = UploadedArtifact::new(b"not an image".to_vec(), MediaType::Png);
        let result = extract_text(
            &artifact,
            &InvgenConfig::default(),
            &MockBackend::fixed("unused"),
        );
        assert!(matches!(result, Err(SourceError::ImageDecode(_))));
    }

    #[test]
    fn raster_artifact_recognized_directly() {
        let image = DynamicImage::new_rgb8(8, 8);
        let mut data = Vec::new();
        image
            .write_to(
                &mut std::io::Cursor::new(&mut data),
                image::ImageFormat::Png,
            )
            .unwrap();

        let artifact = UploadedArtifact::new(data, MediaType::Png);
        let extracted = extract_text(
            &artifact,
            &InvgenConfig::default(),
            &MockBackend::fixed("From: Acme Corp"),
        )
        .unwrap();

        assert_eq!(extracted.text, "From: Acme Corp");
        assert_eq!(extracted.page_count, 1);
    }
}
