//! PDF serialization of a layout using pdf-writer.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use tracing::debug;

use crate::error::RenderError;

use super::layout::{MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use super::{Align, FontFace, Layout, LayoutOp};

const FONT_HELVETICA: Name<'static> = Name(b"F1");
const FONT_HELVETICA_BOLD: Name<'static> = Name(b"F2");
const FONT_COURIER: Name<'static> = Name(b"F3");

impl FontFace {
    fn resource_name(&self) -> Name<'static> {
        match self {
            Self::Helvetica => FONT_HELVETICA,
            Self::HelveticaBold => FONT_HELVETICA_BOLD,
            Self::Courier => FONT_COURIER,
        }
    }

    fn base_font(&self) -> Name<'static> {
        match self {
            Self::Helvetica => Name(b"Helvetica"),
            Self::HelveticaBold => Name(b"Helvetica-Bold"),
            Self::Courier => Name(b"Courier"),
        }
    }
}

/// A line resolved to an absolute position on one page.
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    x: f32,
    y: f32,
    face: FontFace,
    size: f32,
    text: String,
}

/// Flow the layout onto pages, top to bottom, breaking to a new page when
/// the cursor passes the bottom margin.
fn paginate(layout: &Layout) -> Result<Vec<Vec<PlacedLine>>, RenderError> {
    let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];
    let mut cursor = PAGE_HEIGHT - MARGIN;

    for op in &layout.ops {
        match op {
            LayoutOp::Gap(gap) => {
                cursor -= gap;
            }
            LayoutOp::Line(line) => {
                if line.leading <= 0.0 {
                    return Err(RenderError::Layout(format!(
                        "non-positive leading {} on line {:?}",
                        line.leading, line.text
                    )));
                }

                if cursor - line.leading < MARGIN {
                    pages.push(Vec::new());
                    cursor = PAGE_HEIGHT - MARGIN;
                }

                let x = match line.align {
                    Align::Left => MARGIN,
                    Align::Center => {
                        let width =
                            line.text.chars().count() as f32 * line.face.avg_char_em() * line.size;
                        ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
                    }
                };

                cursor -= line.leading;
                if !line.text.is_empty() {
                    pages
                        .last_mut()
                        .expect("pages is non-empty")
                        .push(PlacedLine {
                            x,
                            y: cursor + (line.leading - line.size) / 2.0,
                            face: line.face,
                            size: line.size,
                            text: line.text.clone(),
                        });
                }
            }
        }
    }

    Ok(pages)
}

/// Serialize a layout to PDF bytes.
///
/// Output is a pure function of the layout: no timestamps or generated
/// identifiers are embedded, so equal layouts yield identical bytes.
pub fn render_pdf(layout: &Layout) -> Result<Vec<u8>, RenderError> {
    let pages = paginate(layout)?;

    let mut pdf = Pdf::new();
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let helvetica_id = Ref::new(3);
    let helvetica_bold_id = Ref::new(4);
    let courier_id = Ref::new(5);

    let mut next_id = 6;
    let page_ids: Vec<Ref> = pages
        .iter()
        .map(|_| {
            let id = Ref::new(next_id);
            next_id += 2;
            id
        })
        .collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    pdf.type1_font(helvetica_id)
        .base_font(FontFace::Helvetica.base_font());
    pdf.type1_font(helvetica_bold_id)
        .base_font(FontFace::HelveticaBold.base_font());
    pdf.type1_font(courier_id)
        .base_font(FontFace::Courier.base_font());

    for (page_lines, page_id) in pages.iter().zip(&page_ids) {
        let content_id = Ref::new(page_id.get() + 1);

        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(FONT_HELVETICA, helvetica_id);
            fonts.pair(FONT_HELVETICA_BOLD, helvetica_bold_id);
            fonts.pair(FONT_COURIER, courier_id);
        }
        page.finish();

        let mut content = Content::new();
        for line in page_lines {
            content.begin_text();
            content.set_font(line.face.resource_name(), line.size);
            content.next_line(line.x, line.y);
            content.show(Str(line.text.as_bytes()));
            content.end_text();
        }
        pdf.stream(content_id, &content.finish());
    }

    let bytes = pdf.finish();
    debug!(pages = pages.len(), bytes = bytes.len(), "Serialized PDF");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::super::{TextLine, build_layout};
    use super::*;
    use crate::models::fields::InvoiceFields;
    use crate::render::InvoiceStyle;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn fields() -> InvoiceFields {
        InvoiceFields {
            entity: "Acme".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            amount: "100.00".to_string(),
            description: "Widgets".to_string(),
        }
    }

    fn line(text: &str, leading: f32) -> LayoutOp {
        LayoutOp::Line(TextLine {
            text: text.to_string(),
            face: FontFace::Helvetica,
            size: 12.0,
            align: Align::Left,
            leading,
        })
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn single_short_layout_fits_one_page() {
        let layout = build_layout(&fields(), InvoiceStyle::Simple);
        let pages = paginate(&layout).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn overflow_breaks_to_additional_pages() {
        let ops: Vec<LayoutOp> = (0..60).map(|i| line(&format!("line {i}"), 28.0)).collect();
        let pages = paginate(&Layout { ops }).unwrap();

        // 26 lines of 28pt fit between the margins of an A4 page.
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 26);
        assert_eq!(pages[0][0].text, "line 0");
        assert_eq!(pages[1][0].text, "line 26");
    }

    #[test]
    fn non_positive_leading_is_rejected() {
        let layout = Layout {
            ops: vec![line("bad", 0.0)],
        };
        assert!(matches!(
            paginate(&layout),
            Err(RenderError::Layout(_))
        ));
    }

    #[test]
    fn rendered_bytes_are_a_pdf_with_the_content() {
        for style in InvoiceStyle::ALL {
            let bytes = render_pdf(&build_layout(&fields(), style)).unwrap();

            assert!(bytes.starts_with(b"%PDF-"));
            assert!(contains(&bytes, b"Acme"));
            assert!(contains(&bytes, b"02-01-2024"));
            assert!(contains(&bytes, b"100.00"));
            assert!(contains(&bytes, b"Widgets"));
        }
    }

    #[test]
    fn headings_match_the_style() {
        let simple = render_pdf(&build_layout(&fields(), InvoiceStyle::Simple)).unwrap();
        assert!(contains(&simple, b"INVOICE"));

        let modern = render_pdf(&build_layout(&fields(), InvoiceStyle::Modern)).unwrap();
        assert!(contains(&modern, b"*** Invoice Summary ***"));

        let minimal = render_pdf(&build_layout(&fields(), InvoiceStyle::Minimal)).unwrap();
        assert!(!contains(&minimal, b"INVOICE"));
        assert!(!contains(&minimal, b"Invoice Summary"));
    }

    #[test]
    fn rendering_is_deterministic() {
        for style in InvoiceStyle::ALL {
            let first = render_pdf(&build_layout(&fields(), style)).unwrap();
            let second = render_pdf(&build_layout(&fields(), style)).unwrap();
            assert_eq!(first, second);
        }
    }
}
