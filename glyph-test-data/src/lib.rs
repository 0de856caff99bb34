//! Deterministic synthetic fonts for exercising the casting pipeline.
//!
//! Masks are written as one string per row, `#` for ink, `.` for
//! background, so expected packed words can be worked out by hand.

use std::cell::Cell;
use std::collections::HashMap;

use raster_types::{
    FontMetrics, GlyphBitmap, LineExtent, Point, RasterGlyph, Rasterizer, RenderMode,
};

pub static CAP_A: &[&str] = &[".##.", "#..#", "####", "#..#", "#..#"];
pub static CAP_B: &[&str] = &["###.", "#..#", "###.", "#..#", "###."];
pub static CAP_C: &[&str] = &[".###", "#...", "#...", "#...", ".###"];
pub static CAP_M: &[&str] = &["#..#", "####", "#..#", "#..#", "#..#"];
pub static LOWER_A: &[&str] = &["####", "#..#", "####"];
pub static LOWER_B: &[&str] = &["#...", "#...", "###.", "#..#", "###."];
pub static LOWER_C: &[&str] = &[".###", "#...", ".###"];
pub static LOWER_G: &[&str] = &[".###", "#..#", ".###", "...#", ".##."];
pub static FULL_BLOCK: &[&str] = &["######"; 6];

/// Builds a mask from rows of `#` (ink) and `.` (background).
///
/// # Panics
///
/// Panics on ragged rows.
pub fn mask_from_pattern(rows: &[&str]) -> GlyphBitmap {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut data = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width, "ragged pattern row {row:?}");
        data.extend(row.bytes().map(|b| if b == b'#' { 255 } else { 0 }));
    }
    GlyphBitmap::new(width, height, data)
}

struct Glyph {
    mask: GlyphBitmap,
    offset: Point<i32>,
}

/// A fixed-pitch synthetic face: ascent 7, descent 2, advance 6, one
/// pixel of side bearing at each end of a measured run.
///
/// Cap-height glyphs sit with their ink top at y = 2 of the line box and
/// their bottom on the baseline at y = 7; `g` descends two pixels below
/// it. Characters outside the table render without ink, standing in for
/// glyphs the face cannot draw.
pub struct SyntheticFont {
    glyphs: HashMap<char, Glyph>,
    metrics: FontMetrics,
    advance: i32,
    side_bearing: i32,
}

impl SyntheticFont {
    pub fn basic() -> Self {
        let table: &[(char, &[&str], i32)] = &[
            ('A', CAP_A, 2),
            ('B', CAP_B, 2),
            ('C', CAP_C, 2),
            ('M', CAP_M, 2),
            ('a', LOWER_A, 4),
            ('b', LOWER_B, 2),
            ('c', LOWER_C, 4),
            ('g', LOWER_G, 4),
            ('@', FULL_BLOCK, 2),
        ];
        let mut glyphs: HashMap<char, Glyph> = table
            .iter()
            .map(|&(ch, rows, top)| {
                (
                    ch,
                    Glyph {
                        mask: mask_from_pattern(rows),
                        offset: Point::new(1, top),
                    },
                )
            })
            .collect();
        glyphs.insert(
            ' ',
            Glyph {
                mask: GlyphBitmap::default(),
                offset: Point::new(0, 0),
            },
        );
        Self {
            glyphs,
            metrics: FontMetrics {
                ascent: 7,
                descent: 2,
            },
            advance: 6,
            side_bearing: 1,
        }
    }

    /// The fixed advance every glyph is spaced at.
    pub fn advance(&self) -> i32 {
        self.advance
    }
}

impl Rasterizer for SyntheticFont {
    fn rasterize(&self, ch: char, _mode: RenderMode) -> RasterGlyph {
        match self.glyphs.get(&ch) {
            Some(glyph) => RasterGlyph {
                mask: glyph.mask.clone(),
                offset: glyph.offset,
            },
            None => RasterGlyph {
                mask: GlyphBitmap::default(),
                offset: Point::new(0, 0),
            },
        }
    }

    fn measure(&self, text: &str) -> LineExtent {
        let count = text.chars().count() as i32;
        if count == 0 {
            return LineExtent {
                width: 0,
                height: 0,
                y_offset: 0,
            };
        }
        let mut top = i32::MAX;
        let mut bottom = i32::MIN;
        for ch in text.chars() {
            let glyph = self.rasterize(ch, RenderMode::Mono);
            if let Some(bounds) = glyph.mask.bounding_box() {
                top = top.min(glyph.offset.y + bounds.y_min);
                bottom = bottom.max(glyph.offset.y + bounds.y_max);
            }
        }
        let (height, y_offset) = if top <= bottom { (bottom - top, top) } else { (0, 0) };
        LineExtent {
            width: count * self.advance + 2 * self.side_bearing,
            height,
            y_offset,
        }
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}

/// Wraps [`SyntheticFont`] so that one character renders normally the
/// first time and without ink from then on.
///
/// Downstream passes that re-rasterize an already filtered character set
/// treat the disappearance as a fatal invariant breach; this double
/// exists to trigger that path.
pub struct VanishingFont {
    inner: SyntheticFont,
    target: char,
    renders: Cell<u32>,
}

impl VanishingFont {
    pub fn new(target: char) -> Self {
        Self {
            inner: SyntheticFont::basic(),
            target,
            renders: Cell::new(0),
        }
    }
}

impl Rasterizer for VanishingFont {
    fn rasterize(&self, ch: char, mode: RenderMode) -> RasterGlyph {
        if ch == self.target {
            let seen = self.renders.get();
            self.renders.set(seen + 1);
            if seen > 0 {
                return RasterGlyph {
                    mask: GlyphBitmap::default(),
                    offset: Point::new(0, 0),
                };
            }
        }
        self.inner.rasterize(ch, mode)
    }

    fn measure(&self, text: &str) -> LineExtent {
        self.inner.measure(text)
    }

    fn metrics(&self) -> FontMetrics {
        self.inner.metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_parse_to_tight_masks() {
        let mask = mask_from_pattern(CAP_A);
        assert_eq!((mask.width(), mask.height()), (4, 5));
        let bounds = mask.bounding_box().unwrap();
        assert_eq!((bounds.width(), bounds.height()), (4, 5));
    }

    #[test]
    fn measured_runs_carry_constant_side_bearing() {
        let font = SyntheticFont::basic();
        assert_eq!(font.measure("MM").width, 14);
        assert_eq!(font.measure("MMM").width, 20);
    }

    #[test]
    fn vanishing_glyph_disappears_after_first_render() {
        let font = VanishingFont::new('A');
        assert!(font
            .rasterize('A', RenderMode::Mono)
            .mask
            .bounding_box()
            .is_some());
        assert!(font
            .rasterize('A', RenderMode::Mono)
            .mask
            .bounding_box()
            .is_none());
        // other characters are untouched
        assert!(font
            .rasterize('B', RenderMode::Mono)
            .mask
            .bounding_box()
            .is_some());
    }
}
