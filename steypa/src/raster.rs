//! The production rasterizer backend, built on fontdue.

use std::path::Path;

use memmap2::Mmap;
use raster_types::{
    FontMetrics, GlyphBitmap, LineExtent, Point, RasterGlyph, Rasterizer, RenderMode,
};

use crate::CastError;

/// Coverage at or above this counts as ink in monochrome mode.
const MONO_CUTOFF: u8 = 128;

/// A font file parsed at one fixed pixel size.
pub struct FontdueInstance {
    font: fontdue::Font,
    size: f32,
    ascent: i32,
    descent: i32,
}

impl FontdueInstance {
    /// Maps `path` into memory and parses it for rasterization at `size`
    /// pixels per em.
    pub fn from_file(path: &Path, size: u32) -> Result<Self, CastError> {
        let file = std::fs::File::open(path).map_err(|source| CastError::FontFile {
            path: path.to_owned(),
            source,
        })?;
        let data = unsafe { Mmap::map(&file) }.map_err(|source| CastError::FontFile {
            path: path.to_owned(),
            source,
        })?;
        Self::from_bytes(&data, path, size)
    }

    fn from_bytes(data: &[u8], path: &Path, size: u32) -> Result<Self, CastError> {
        let size = size as f32;
        let settings = fontdue::FontSettings {
            scale: size,
            ..Default::default()
        };
        let font = fontdue::Font::from_bytes(data, settings).map_err(|reason| {
            CastError::FontParse {
                path: path.to_owned(),
                reason: reason.to_owned(),
            }
        })?;
        let line = font
            .horizontal_line_metrics(size)
            .ok_or_else(|| CastError::FontParse {
                path: path.to_owned(),
                reason: "no horizontal line metrics".to_owned(),
            })?;
        Ok(Self {
            font,
            size,
            ascent: line.ascent.round() as i32,
            descent: (-line.descent).round() as i32,
        })
    }

    /// fontdue reports glyph boxes baseline-relative and y-up; the line
    /// box wants the top edge, y-down from the ascender line.
    fn line_box_top(&self, ymin: i32, height: usize) -> i32 {
        self.ascent - (ymin + height as i32)
    }
}

impl Rasterizer for FontdueInstance {
    fn rasterize(&self, ch: char, mode: RenderMode) -> RasterGlyph {
        let (metrics, coverage) = self.font.rasterize(ch, self.size);
        let mask = GlyphBitmap::new(metrics.width, metrics.height, coverage);
        let mask = match mode {
            RenderMode::Mono => mask.thresholded(MONO_CUTOFF),
            RenderMode::Gray => mask,
        };
        let top = self.line_box_top(metrics.ymin, metrics.height);
        RasterGlyph {
            mask,
            offset: Point::new(metrics.xmin, top),
        }
    }

    fn measure(&self, text: &str) -> LineExtent {
        let mut width = 0f32;
        let mut top = i32::MAX;
        let mut bottom = i32::MIN;
        for ch in text.chars() {
            let metrics = self.font.metrics(ch, self.size);
            width += metrics.advance_width;
            if metrics.width > 0 && metrics.height > 0 {
                let glyph_top = self.line_box_top(metrics.ymin, metrics.height);
                top = top.min(glyph_top);
                bottom = bottom.max(glyph_top + metrics.height as i32);
            }
        }
        let (height, y_offset) = if top <= bottom { (bottom - top, top) } else { (0, 0) };
        LineExtent {
            width: width.round() as i32,
            height,
            y_offset,
        }
    }

    fn metrics(&self) -> FontMetrics {
        FontMetrics {
            ascent: self.ascent,
            descent: self.descent,
        }
    }
}
