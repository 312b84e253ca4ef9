//! PDF artifact access using lopdf and pdf-extract.

use image::{DynamicImage, ImageBuffer, Rgba};
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, trace};

use super::Result;
use crate::error::SourceError;

/// A loaded PDF artifact.
///
/// Scanned invoices are PDFs whose pages each carry one full-page raster
/// image; `page_image` recovers that scan for OCR. Born-digital PDFs are
/// served through `embedded_text` instead.
pub struct PdfSource {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfSource {
    /// Parse a PDF from bytes.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut document =
            Document::load_mem(data).map_err(|e| SourceError::Parse(e.to_string()))?;

        let raw_data = if document.is_encrypted() {
            // PDFs with empty-password encryption are still readable.
            if document.decrypt("").is_err() {
                return Err(SourceError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| SourceError::Parse(e.to_string()))?;
            decrypted
        } else {
            data.to_vec()
        };

        if document.get_pages().is_empty() {
            return Err(SourceError::NoPages);
        }

        Ok(Self { document, raw_data })
    }

    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Embedded text, when the PDF carries enough of it to skip OCR.
    ///
    /// Returns `Ok(None)` when extraction yields fewer than `min_chars`
    /// non-whitespace characters; such PDFs are treated as scans.
    pub fn embedded_text(&self, min_chars: usize) -> Result<Option<String>> {
        let text = match pdf_extract::extract_text_from_mem(&self.raw_data) {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "Embedded text extraction failed, treating as scan");
                return Ok(None);
            }
        };

        let meaningful = text.chars().filter(|c| !c.is_whitespace()).count();
        if meaningful < min_chars {
            debug!(chars = meaningful, "Embedded text too short, treating as scan");
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    /// The scan image of a page, chosen as the largest raster on that page.
    pub fn page_image(&self, page: u32) -> Result<DynamicImage> {
        let pages = self.document.get_pages();
        let page_id = *pages.get(&page).ok_or(SourceError::PageImage(page))?;

        let mut images = self.images_on_page(page_id);
        if images.is_empty() {
            return Err(SourceError::PageImage(page));
        }

        images.sort_by_key(|img| img.width() as u64 * img.height() as u64);
        let image = images.pop().expect("images is non-empty");
        debug!(
            page,
            width = image.width(),
            height = image.height(),
            "Selected page scan image"
        );
        Ok(image)
    }

    fn images_on_page(&self, page_id: ObjectId) -> Vec<DynamicImage> {
        let mut images = Vec::new();

        let Some(resources) = self.page_resources(page_id) else {
            return images;
        };

        if let Ok(xobjects) = resources.get(b"XObject") {
            if let Ok((_, Object::Dictionary(xobj_dict))) = self.document.dereference(xobjects) {
                for (_name, obj_ref) in xobj_dict.iter() {
                    if let Ok((_, obj)) = self.document.dereference(obj_ref) {
                        if let Some(img) = self.image_from_object(obj) {
                            images.push(img);
                        }
                    }
                }
            }
        }

        images
    }

    /// Resources dictionary for a page, walking up the page tree for
    /// inherited entries.
    fn page_resources(&self, node_id: ObjectId) -> Option<lopdf::Dictionary> {
        let node = self.document.get_object(node_id).ok()?;
        let Object::Dictionary(dict) = node else {
            return None;
        };

        if let Ok(resources) = dict.get(b"Resources") {
            if let Ok((_, Object::Dictionary(res))) = self.document.dereference(resources) {
                return Some(res.clone());
            }
        }

        if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
            return self.page_resources(*parent_id);
        }

        None
    }

    fn image_from_object(&self, obj: &Object) -> Option<DynamicImage> {
        let Object::Stream(stream) = obj else {
            return None;
        };
        let dict = &stream.dict;

        let subtype = dict.get(b"Subtype").ok()?;
        if subtype.as_name().ok()? != b"Image" {
            return None;
        }

        let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
        let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;
        trace!(width, height, "Found image XObject");

        if let Ok(filter) = dict.get(b"Filter") {
            let filter_name = match filter {
                Object::Name(name) => Some(name.as_slice()),
                Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
                _ => None,
            };

            match filter_name {
                Some(b"DCTDecode") => {
                    // JPEG stream, decodable as-is.
                    return image::load_from_memory_with_format(
                        &stream.content,
                        image::ImageFormat::Jpeg,
                    )
                    .ok();
                }
                Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
                    trace!("Unsupported image codec in XObject");
                    return None;
                }
                _ => {}
            }
        }

        let data = stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone());

        let color_space = dict
            .get(b"ColorSpace")
            .ok()
            .and_then(|o| match o {
                Object::Name(name) => Some(name.as_slice()),
                Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
                Object::Reference(r) => self
                    .document
                    .get_object(*r)
                    .ok()
                    .and_then(|o| o.as_name().ok()),
                _ => None,
            })
            .unwrap_or(b"DeviceRGB");

        let bits = dict
            .get(b"BitsPerComponent")
            .ok()
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(8);
        if bits != 8 {
            trace!(bits, "Unsupported bits per component");
            return None;
        }

        image_from_raw(&data, width, height, color_space)
    }
}

fn image_from_raw(
    data: &[u8],
    width: u32,
    height: u32,
    color_space: &[u8],
) -> Option<DynamicImage> {
    let pixels = (width as usize) * (height as usize);

    match color_space {
        b"DeviceRGB" | b"RGB" if data.len() >= pixels * 3 => {
            let mut rgba = Vec::with_capacity(pixels * 4);
            for chunk in data[..pixels * 3].chunks_exact(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(255);
            }
            ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba).map(DynamicImage::ImageRgba8)
        }
        b"DeviceGray" | b"G" if data.len() >= pixels => {
            let mut rgba = Vec::with_capacity(pixels * 4);
            for &gray in &data[..pixels] {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba).map(DynamicImage::ImageRgba8)
        }
        _ => {
            trace!(
                colorspace = %String::from_utf8_lossy(color_space),
                data_len = data.len(),
                "Could not decode raw image data"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let result = PdfSource::load(b"this is not a pdf");
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[test]
    fn raw_gray_image_decodes() {
        let data = vec![128u8; 16];
        let image = image_from_raw(&data, 4, 4, b"DeviceGray").unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);
    }

    #[test]
    fn raw_rgb_image_decodes() {
        let data = vec![0u8; 4 * 4 * 3];
        let image = image_from_raw(&data, 4, 4, b"DeviceRGB").unwrap();
        assert_eq!(image.width(), 4);
    }

    #[test]
    fn short_raw_data_is_rejected() {
        assert!(image_from_raw(&[0u8; 3], 4, 4, b"DeviceRGB").is_none());
    }
}
