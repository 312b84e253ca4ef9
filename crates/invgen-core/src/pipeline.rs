//! The request pipeline, one linear pass per uploaded artifact.
//!
//! All state is threaded through explicit parameters; nothing persists
//! between invocations.

use invgen_ocr::OcrBackend;
use tracing::info;

use crate::error::Result;
use crate::extract::{ExtractionResult, FieldParser};
use crate::models::config::InvgenConfig;
use crate::models::fields::InvoiceFields;
use crate::output::{RenderedInvoice, suggested_filename};
use crate::render::{self, InvoiceStyle};
use crate::source::{self, UploadedArtifact};

/// Run the source adapter and field extractor over an artifact, producing
/// the pre-filled correction form draft.
pub fn extract_fields(
    artifact: &UploadedArtifact,
    config: &InvgenConfig,
    ocr: &dyn OcrBackend,
) -> Result<ExtractionResult> {
    let extracted = source::extract_text(artifact, config, ocr)?;
    info!(
        pages = extracted.page_count,
        chars = extracted.text.len(),
        "Source text extracted"
    );

    let result = FieldParser::new().parse(&extracted.text);
    let (filled, total) = result.guesses.coverage();
    info!(filled, total, ms = result.processing_time_ms, "Fields guessed");

    Ok(result)
}

/// Render confirmed fields in the given style and attach the suggested
/// file name.
pub fn render_invoice(fields: &InvoiceFields, style: InvoiceStyle) -> Result<RenderedInvoice> {
    let data = render::render(fields, style)?;
    let filename = suggested_filename(&fields.entity, fields.date);
    info!(%filename, bytes = data.len(), style = %style, "Invoice rendered");

    Ok(RenderedInvoice { data, filename })
}
