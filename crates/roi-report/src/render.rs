//! # PDF Rendering
//!
//! Lays out [`ReportContent`] on a single A4 page.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────┐  210 × 297 mm
//! │ ↓ 20 mm top margin           │
//! │ Header      18pt bold        │
//! │ Subheader   14pt bold        │
//! │ Body        11pt regular     │
//! │ ...                          │
//! │ ← 20 mm left margin          │
//! └──────────────────────────────┘
//! ```
//!
//! Pure: the bytes are returned, never written. Filing them is the job of
//! [`crate::store::ReportStore`].

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::content::{LineStyle, ReportContent};
use crate::error::{ReportError, ReportResult};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

/// Font size and the vertical space a line of that style takes.
fn metrics(style: LineStyle) -> (f32, f32) {
    match style {
        LineStyle::Header => (18.0, 12.0),
        LineStyle::Subheader => (14.0, 9.0),
        LineStyle::Body => (11.0, 6.5),
        LineStyle::Spacer => (0.0, 4.0),
    }
}

/// Renders the report as PDF bytes.
///
/// ## Example
/// ```rust,ignore
/// let bytes = render_pdf(&content)?;
/// assert!(bytes.starts_with(b"%PDF"));
/// ```
pub fn render_pdf(content: &ReportContent) -> ReportResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        content.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Report",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(ReportError::render)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(ReportError::render)?;

    let layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    for (style, text) in content.lines() {
        let (size, advance) = metrics(style);
        match style {
            LineStyle::Spacer => {}
            LineStyle::Header | LineStyle::Subheader => {
                layer.use_text(text, size, Mm(MARGIN_MM), Mm(y), &bold);
            }
            LineStyle::Body => {
                layer.use_text(text, size, Mm(MARGIN_MM), Mm(y), &regular);
            }
        }
        y -= advance;
    }

    let bytes = doc.save_to_bytes().map_err(ReportError::render)?;
    debug!(size = bytes.len(), "Rendered report");
    Ok(bytes)
}
