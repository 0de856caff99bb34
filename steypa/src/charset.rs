//! Character-set canonicalization.

use indexmap::IndexSet;
use raster_types::{Rasterizer, RenderMode};

/// The canonical character set: distinct characters in first-seen order,
/// each of which (except space) renders with visible ink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Canonicalizes raw charset text against `font`.
    ///
    /// Line breaks are stripped, duplicates collapse onto their first
    /// occurrence, and characters that rasterize without any ink are
    /// dropped with a warning. Space never has ink but is always kept;
    /// it stands in for everything invisible.
    pub fn from_text(text: &str, font: &impl Rasterizer) -> Self {
        let deduped: IndexSet<char> = text
            .chars()
            .filter(|ch| !matches!(ch, '\n' | '\r'))
            .collect();
        let chars = deduped
            .into_iter()
            .filter(|&ch| {
                if ch == ' ' {
                    return true;
                }
                let visible = font
                    .rasterize(ch, RenderMode::Mono)
                    .mask
                    .bounding_box()
                    .is_some();
                if !visible {
                    log::warn!("Dropping '{ch}' (U+{:04X}): no visible pixels", ch as u32);
                }
                visible
            })
            .collect();
        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// The whole charset as one string, used for the probe measurement
    /// and the preview strip.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}
