//! Owned glyph sample grids and their ink bounds.

/// A row-major, y-down grid of 8-bit samples.
///
/// `0` is background, any non-zero value is ink. Monochrome masks carry
/// only 0 and 255.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GlyphBitmap {
    /// Wraps raw samples.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "sample count must match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the position is outside the mask.
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "sample ({x}, {y}) outside {}x{} mask",
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Returns a copy with every sample snapped to 0 or 255.
    ///
    /// Samples at or above `cutoff` become ink.
    pub fn thresholded(&self, cutoff: u8) -> GlyphBitmap {
        let data = self
            .data
            .iter()
            .map(|&sample| if sample >= cutoff { 255 } else { 0 })
            .collect();
        GlyphBitmap {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Tight bounds of the ink, or `None` when every sample is background.
    pub fn bounding_box(&self) -> Option<MaskBounds> {
        let mut bounds: Option<MaskBounds> = None;
        for y in 0..self.height {
            let row = &self.data[y * self.width..(y + 1) * self.width];
            for (x, &sample) in row.iter().enumerate() {
                if sample == 0 {
                    continue;
                }
                let (x, y) = (x as i32, y as i32);
                bounds = Some(match bounds {
                    None => MaskBounds {
                        x_min: x,
                        y_min: y,
                        x_max: x + 1,
                        y_max: y + 1,
                    },
                    Some(prior) => MaskBounds {
                        x_min: prior.x_min.min(x),
                        y_min: prior.y_min,
                        x_max: prior.x_max.max(x + 1),
                        y_max: y + 1,
                    },
                });
            }
        }
        bounds
    }
}

/// Tight ink bounds within a mask.
///
/// Top-left edges are inclusive, bottom-right edges exclusive, so a box
/// returned by [`GlyphBitmap::bounding_box`] always has positive area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskBounds {
    pub x_min: i32,
    pub y_min: i32,
    /// One past the rightmost ink column.
    pub x_max: i32,
    /// One past the bottom ink row.
    pub y_max: i32,
}

impl MaskBounds {
    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}
