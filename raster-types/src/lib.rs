//! Pixel-space glyph types shared by the steypa crates.
//!
//! Everything here lives in a y-down coordinate system whose origin is the
//! top-left corner of the nominal line box, matching how bitmaps are
//! addressed in memory and on screen.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod mask;

pub use font_types::Point;
pub use mask::{GlyphBitmap, MaskBounds};

/// How outline coverage is converted into mask samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Hard 0/255 samples, coverage snapped at the backend's cutoff.
    Mono,
    /// Raw 8-bit coverage.
    Gray,
}

/// Font-wide vertical metrics, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the baseline up to the top of the line box.
    pub ascent: i32,
    /// Distance from the baseline down to the bottom of the line box,
    /// as a positive number.
    pub descent: i32,
}

/// The measured extent of one left-to-right run of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineExtent {
    /// Sum of the glyph advances, rounded to whole pixels.
    pub width: i32,
    /// Height of the union ink box of the run.
    pub height: i32,
    /// Distance from the top of the line box down to the top of the ink.
    pub y_offset: i32,
}

/// A rasterized glyph: the sample mask plus its placement.
#[derive(Clone, Debug)]
pub struct RasterGlyph {
    pub mask: GlyphBitmap,
    /// Position of the mask's top-left corner relative to the top-left of
    /// the line box.
    pub offset: Point<i32>,
}

/// A font loaded at one fixed pixel size.
///
/// Implementations own whatever engine state they need and hand out
/// rendered masks by value; nothing here borrows from the backend.
pub trait Rasterizer {
    /// Renders one character.
    ///
    /// Rendering is infallible: a character the font has no mapping for
    /// comes back as whatever the font draws in its place (usually the
    /// missing-glyph box), and a character with no visible shape comes
    /// back as a mask without ink.
    fn rasterize(&self, ch: char, mode: RenderMode) -> RasterGlyph;

    /// Measures `text` laid out as a single run.
    fn measure(&self, text: &str) -> LineExtent;

    /// Font-wide vertical metrics.
    fn metrics(&self) -> FontMetrics;
}
