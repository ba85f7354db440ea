//! Label width estimation.
//!
//! The engine never measures real glyphs; it estimates a label's rendered
//! width from its grapheme count so overlap can be decided without a font
//! system.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelMetrics {
    /// Font size in px.
    pub font_px: f64,
    /// Average glyph advance as a fraction of the font size.
    pub advance_em: f64,
    /// Horizontal padding on each side of a label, in px.
    pub padding_px: f64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            font_px: 14.0,
            advance_em: 0.6,
            padding_px: 2.0,
        }
    }
}

pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

pub fn estimate_width(text: &str, metrics: &LabelMetrics) -> f64 {
    let glyphs = grapheme_count(text) as f64;
    glyphs * metrics.font_px * metrics.advance_em + metrics.padding_px * 2.0
}
