//! Font-wide layout constants, measured once per run.

use raster_types::{FontMetrics, Rasterizer};

use crate::charset::Charset;

/// The wide glyph whose repeated widths cancel constant side bearings.
const REFERENCE_GLYPH: &str = "M";

/// Shared layout constants every glyph is positioned against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Vertical pitch between consecutive text lines: the bottom of the
    /// full-charset ink, measured from the top of the line box.
    pub line_height: i32,
    /// Fixed horizontal pitch between glyph origins.
    pub advance_width: i32,
    pub ascent: i32,
    pub descent: i32,
    /// Top of the full-charset ink; the shared vertical reference that
    /// every descriptor box is expressed against.
    pub origin_y: i32,
}

impl Layout {
    /// Probes `font` with the whole charset and derives the constants.
    ///
    /// The advance width is the width difference between `"MMM"` and
    /// `"MM"`, which cancels whatever constant side bearing a single
    /// measurement would include. That only holds for fixed-pitch fonts;
    /// proportional input yields a meaningless advance and is not
    /// detected here.
    pub fn measure(charset: &Charset, font: &impl Rasterizer) -> Layout {
        let probe = font.measure(&charset.text());
        let metrics: FontMetrics = font.metrics();
        let triple = font.measure(&REFERENCE_GLYPH.repeat(3)).width;
        let double = font.measure(&REFERENCE_GLYPH.repeat(2)).width;
        let layout = Layout {
            line_height: probe.height + probe.y_offset,
            advance_width: triple - double,
            ascent: metrics.ascent,
            descent: metrics.descent,
            origin_y: probe.y_offset,
        };
        log::debug!(
            "Measured layout: line height {}, advance {}, ascent {}, descent {}, ink origin {}",
            layout.line_height,
            layout.advance_width,
            layout.ascent,
            layout.descent,
            layout.origin_y
        );
        layout
    }
}
