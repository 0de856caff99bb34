//! Monochrome preview strip of the whole charset.

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use raster_types::{Rasterizer, RenderMode};

use crate::charset::Charset;
use crate::metrics::Layout;

const INK: Luma<u8> = Luma([255]);

/// Renders the charset left-to-right at the fixed advance, white ink on
/// black, one line high, and encodes the strip as a PNG.
///
/// Glyphs are blitted at their line-box offsets, so baselines line up
/// across the strip; ink falling outside the canvas is clipped.
pub fn render(
    charset: &Charset,
    layout: &Layout,
    font: &impl Rasterizer,
) -> Result<Vec<u8>, image::ImageError> {
    let width = layout.advance_width.max(0) as u32 * charset.len() as u32;
    let height = layout.line_height.max(0) as u32;
    // PNG disallows zero-size images
    let mut strip = GrayImage::new(width.max(1), height.max(1));
    let mut cell_x = 0i32;
    for ch in charset.iter() {
        if ch != ' ' {
            blit(&mut strip, font.rasterize(ch, RenderMode::Mono), cell_x);
        }
        cell_x += layout.advance_width;
    }
    let mut bytes = Vec::new();
    strip.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn blit(strip: &mut GrayImage, glyph: raster_types::RasterGlyph, cell_x: i32) {
    for y in 0..glyph.mask.height() {
        for x in 0..glyph.mask.width() {
            if glyph.mask.sample(x, y) == 0 {
                continue;
            }
            let px = cell_x + glyph.offset.x + x as i32;
            let py = glyph.offset.y + y as i32;
            if (0..strip.width() as i32).contains(&px) && (0..strip.height() as i32).contains(&py) {
                strip.put_pixel(px as u32, py as u32, INK);
            }
        }
    }
}
