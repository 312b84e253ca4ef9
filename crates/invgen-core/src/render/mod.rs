//! Invoice rendering: fields + style to a paginated PDF.
//!
//! Rendering is split in two: `build_layout` is a pure function from the
//! confirmed fields and a style to a sequence of text lines and gaps, and
//! `pdf::render_pdf` turns that layout into bytes. Document content can be
//! inspected and tested on the layout alone.

mod layout;
mod pdf;

pub use layout::build_layout;
pub use pdf::render_pdf;

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;
use crate::models::fields::InvoiceFields;

/// One of the three fixed visual templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStyle {
    /// Centered INVOICE heading with one labeled line per field.
    Simple,
    /// Bold summary heading over an indented block.
    Modern,
    /// Monospaced one-liner plus the bare description.
    Minimal,
}

impl InvoiceStyle {
    /// All styles, in selector order.
    pub const ALL: [InvoiceStyle; 3] = [Self::Simple, Self::Modern, Self::Minimal];
}

impl fmt::Display for InvoiceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Simple => "Simple",
            Self::Modern => "Modern",
            Self::Minimal => "Minimal",
        };
        f.write_str(name)
    }
}

impl FromStr for InvoiceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "modern" => Ok(Self::Modern),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!("unknown style: {other}")),
        }
    }
}

/// Built-in fonts used by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl FontFace {
    /// Rough average glyph width in em units, for wrapping and centering.
    /// Courier is exact; the Helvetica values are estimates that err wide.
    pub(crate) fn avg_char_em(&self) -> f32 {
        match self {
            Self::Helvetica => 0.5,
            Self::HelveticaBold => 0.53,
            Self::Courier => 0.6,
        }
    }
}

/// Horizontal placement of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A single line of text to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub face: FontFace,
    pub size: f32,
    pub align: Align,
    /// Vertical advance consumed by this line.
    pub leading: f32,
}

/// One layout instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutOp {
    Line(TextLine),
    /// Extra vertical space.
    Gap(f32),
}

/// Ordered draw instructions for the whole document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub ops: Vec<LayoutOp>,
}

impl Layout {
    /// The text of all lines, joined with newlines. Used for content checks
    /// without going through a PDF engine.
    pub fn text_content(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                LayoutOp::Line(line) => Some(line.text.as_str()),
                LayoutOp::Gap(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render confirmed fields in the given style to PDF bytes.
pub fn render(fields: &InvoiceFields, style: InvoiceStyle) -> Result<Vec<u8>, RenderError> {
    render_pdf(&build_layout(fields, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_from_str() {
        assert_eq!("simple".parse::<InvoiceStyle>(), Ok(InvoiceStyle::Simple));
        assert_eq!("Modern".parse::<InvoiceStyle>(), Ok(InvoiceStyle::Modern));
        assert_eq!("MINIMAL".parse::<InvoiceStyle>(), Ok(InvoiceStyle::Minimal));
        assert!("fancy".parse::<InvoiceStyle>().is_err());
    }

    #[test]
    fn style_display_round_trips() {
        for style in InvoiceStyle::ALL {
            assert_eq!(style.to_string().parse::<InvoiceStyle>(), Ok(style));
        }
    }
}
