//! Output dispatch: rendered bytes plus a download name.

use chrono::NaiveDate;

/// Content type of every rendered invoice.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A finished invoice, ready to hand to the caller as one downloadable unit.
#[derive(Debug, Clone)]
pub struct RenderedInvoice {
    /// PDF bytes.
    pub data: Vec<u8>,
    /// Suggested file name.
    pub filename: String,
}

impl RenderedInvoice {
    /// The fixed content type.
    pub fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }
}

/// Suggested file name: entity with spaces replaced by underscores, then
/// the date as DD_MM_YYYY.
pub fn suggested_filename(entity: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}.pdf",
        entity.replace(' ', "_"),
        date.format("%d_%m_%Y")
    )
}
