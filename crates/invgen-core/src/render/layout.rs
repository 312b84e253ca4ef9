//! Template layouts.

use crate::models::fields::InvoiceFields;

use super::{Align, FontFace, InvoiceStyle, Layout, LayoutOp, TextLine};

/// A4 page size in points.
pub(crate) const PAGE_WIDTH: f32 = 595.28;
pub(crate) const PAGE_HEIGHT: f32 = 841.89;

/// Uniform page margin.
pub(crate) const MARGIN: f32 = 54.0;

const MM: f32 = 2.834_646;

/// Standard line height (10 mm) shared by all templates.
const LINE_HEIGHT: f32 = 10.0 * MM;
const GAP_LARGE: f32 = 10.0 * MM;
const GAP_SMALL: f32 = 5.0 * MM;

const BODY_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 14.0;

/// Indentation carried by the Modern block lines.
const MODERN_INDENT: &str = "        ";

const MODERN_SEPARATOR: &str = "-------------------------";

/// Build the draw instructions for the given fields and style.
pub fn build_layout(fields: &InvoiceFields, style: InvoiceStyle) -> Layout {
    match style {
        InvoiceStyle::Simple => simple(fields),
        InvoiceStyle::Modern => modern(fields),
        InvoiceStyle::Minimal => minimal(fields),
    }
}

fn simple(fields: &InvoiceFields) -> Layout {
    let mut ops = vec![
        centered("INVOICE", FontFace::Helvetica, BODY_SIZE),
        LayoutOp::Gap(GAP_LARGE),
        left(format!("Entity: {}", fields.entity), FontFace::Helvetica),
        left(format!("Date: {}", fields.date_display()), FontFace::Helvetica),
        left(format!("Amount: ${}", fields.amount), FontFace::Helvetica),
    ];
    ops.extend(wrapped(
        &format!("Description: {}", fields.description),
        FontFace::Helvetica,
        BODY_SIZE,
    ));
    Layout { ops }
}

fn modern(fields: &InvoiceFields) -> Layout {
    let mut ops = vec![
        centered("*** Invoice Summary ***", FontFace::HelveticaBold, HEADING_SIZE),
        LayoutOp::Gap(GAP_SMALL),
    ];

    let block = [
        format!("Entity: {}", fields.entity),
        format!("Date: {}", fields.date_display()),
        format!("Amount: ${}", fields.amount),
        MODERN_SEPARATOR.to_string(),
        format!("Description: {}", fields.description),
    ];
    for line in block {
        ops.extend(wrapped(
            &format!("{MODERN_INDENT}{line}"),
            FontFace::Helvetica,
            BODY_SIZE,
        ));
    }

    Layout { ops }
}

fn minimal(fields: &InvoiceFields) -> Layout {
    let mut ops = wrapped(
        &format!(
            "{} | {} | ${}",
            fields.entity,
            fields.date_display(),
            fields.amount
        ),
        FontFace::Courier,
        BODY_SIZE,
    );
    ops.push(LayoutOp::Gap(GAP_LARGE));
    ops.extend(wrapped(&fields.description, FontFace::Courier, BODY_SIZE));
    Layout { ops }
}

fn centered(text: &str, face: FontFace, size: f32) -> LayoutOp {
    LayoutOp::Line(TextLine {
        text: text.to_string(),
        face,
        size,
        align: Align::Center,
        leading: LINE_HEIGHT,
    })
}

fn left(text: String, face: FontFace) -> LayoutOp {
    LayoutOp::Line(TextLine {
        text,
        face,
        size: BODY_SIZE,
        align: Align::Left,
        leading: LINE_HEIGHT,
    })
}

/// Wrap text to the usable page width, one layout line per visual line.
fn wrapped(text: &str, face: FontFace, size: f32) -> Vec<LayoutOp> {
    wrap(text, face, size)
        .into_iter()
        .map(|line| {
            LayoutOp::Line(TextLine {
                text: line,
                face,
                size,
                align: Align::Left,
                leading: LINE_HEIGHT,
            })
        })
        .collect()
}

/// Greedy word wrap against an estimated character budget. Words longer
/// than a full line are split hard.
fn wrap(text: &str, face: FontFace, size: f32) -> Vec<String> {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    let max_chars = ((usable / (face.avg_char_em() * size)) as usize).max(1);

    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let word_len = word.chars().count();

        if !current.is_empty() && current.chars().count() + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
        }

        if word_len > max_chars {
            let mut rest: Vec<char> = word.chars().collect();
            while rest.len() > max_chars {
                let head: String = rest.drain(..max_chars).collect();
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(head);
            }
            current = rest.into_iter().collect();
        } else if current.is_empty() {
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
