//! Glyph packing: the descriptor table and the packed pixel-data array.
//!
//! Masks are serialized row-major, least-significant-bit first, into
//! 32-bit words laid back-to-back in one flat array; each descriptor
//! records where its glyph's words begin. This layout is what the
//! on-device renderer walks, so word counts and bit order are fixed.

use raster_types::{GlyphBitmap, MaskBounds, Rasterizer, RenderMode};

use crate::charset::Charset;
use crate::metrics::Layout;
use crate::CastError;

/// Bits per packed data word.
pub const WORD_BITS: usize = 32;

/// One charset entry in the descriptor table.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphDescriptor {
    pub code_point: u32,
    /// `[x1, y1, x2, y2]` relative to the top-left of the line box, the
    /// ink centered within the fixed advance cell.
    pub bbox: [f32; 4],
    /// Index of this glyph's first word in the packed data array. For a
    /// glyph without pixels this equals the next glyph's offset, and may
    /// sit one past the end of the array.
    pub data_offset: usize,
}

/// The finished font: identity, layout constants and the two tables.
///
/// Assembled once by [`pack_charset`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    pub name: String,
    pub size: u32,
    pub layout: Layout,
    pub glyphs: Vec<GlyphDescriptor>,
    pub data: Vec<u32>,
}

/// Packs every charset entry, in order, into a [`FontDescriptor`].
///
/// Space gets a degenerate box and no pixels. Every other character had
/// ink when the charset was filtered, so a mask that comes back empty
/// here means the rasterizer is not deterministic; that breaks the
/// single-pass assumption and is fatal.
pub fn pack_charset(
    name: &str,
    size: u32,
    charset: &Charset,
    layout: &Layout,
    font: &impl Rasterizer,
) -> Result<FontDescriptor, CastError> {
    let mut glyphs = Vec::with_capacity(charset.len());
    let mut data = Vec::new();
    for ch in charset.iter() {
        let data_offset = data.len();
        let mut bbox = [0.0; 4];
        if ch != ' ' {
            let glyph = font.rasterize(ch, RenderMode::Mono);
            let bounds = glyph
                .mask
                .bounding_box()
                .ok_or(CastError::RasterInvariant(ch))?;
            let x1 = (layout.advance_width - bounds.width()) as f32 / 2.0;
            let y1 = (glyph.offset.y - layout.origin_y + bounds.y_min) as f32;
            bbox = [
                x1,
                y1,
                x1 + bounds.width() as f32,
                y1 + bounds.height() as f32,
            ];
            let words = pack_mask(&glyph.mask, bounds, &mut data);
            log::trace!("Packed '{ch}': {words} words at offset {data_offset}");
        }
        glyphs.push(GlyphDescriptor {
            code_point: ch as u32,
            bbox,
            data_offset,
        });
    }
    Ok(FontDescriptor {
        name: name.to_owned(),
        size,
        layout: *layout,
        glyphs,
        data,
    })
}

/// Serializes the samples inside `bounds`, row-major and LSB first,
/// appending whole words to `out`; returns how many words were appended.
///
/// Only full-coverage samples (255) set bits. The trailing partial word
/// is flushed when it holds any set bit, and also when earlier words of
/// the same glyph were already flushed, so a region with ink always
/// occupies exactly `ceil(width * height / WORD_BITS)` words while an
/// all-background region occupies none.
pub fn pack_mask(mask: &GlyphBitmap, bounds: MaskBounds, out: &mut Vec<u32>) -> usize {
    let mut word = 0u32;
    let mut bit = 0;
    let mut words = 0;
    for y in bounds.y_min..bounds.y_max {
        for x in bounds.x_min..bounds.x_max {
            if mask.sample(x as usize, y as usize) == 255 {
                word |= 1 << bit;
            }
            bit += 1;
            if bit == WORD_BITS {
                out.push(word);
                words += 1;
                word = 0;
                bit = 0;
            }
        }
    }
    if word != 0 || (bit > 0 && words > 0) {
        out.push(word);
        words += 1;
    }
    words
}
