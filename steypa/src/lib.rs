//! Casting scalable fonts into embeddable bitmap-font tables.
//!
//! The pipeline is a strict producer chain: canonicalize the character
//! set, measure the shared layout constants, pack every glyph into the
//! descriptor table and the flat pixel-data array, then render the C
//! declarations and the preview strip. Everything is generated in memory
//! and only written out once the whole run has succeeded.

pub mod charset;
pub mod emit;
pub mod metrics;
pub mod pack;
pub mod preview;
pub mod raster;

use std::io;
use std::path::{Path, PathBuf};

use raster_types::Rasterizer;
use thiserror::Error;

pub use charset::Charset;
pub use metrics::Layout;
pub use pack::{FontDescriptor, GlyphDescriptor};
pub use raster::FontdueInstance;

/// Characters cast when no charset file is given: printable ASCII.
pub static DEFAULT_CHARSET: &str = include_str!("../resources/default_charset.txt");

#[derive(Debug, Error)]
pub enum CastError {
    #[error("Failed to read font file {}: {}", .path.display(), .source)]
    FontFile { path: PathBuf, source: io::Error },
    #[error("Failed to parse font file {}: {}", .path.display(), .reason)]
    FontParse { path: PathBuf, reason: String },
    #[error("Failed to read charset file {}: {}", .path.display(), .source)]
    CharsetFile { path: PathBuf, source: io::Error },
    #[error("Glyph '{0}' lost its pixels between filtering and packing")]
    RasterInvariant(char),
    #[error("Failed to encode preview image: {0}")]
    Preview(#[from] image::ImageError),
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

/// The generated artifacts, held in memory until written in one go.
pub struct Artifacts {
    pub font_name: String,
    /// Contents of the `.h` declaration.
    pub header: String,
    /// Contents of the `.c` definition.
    pub source: String,
    /// PNG-encoded preview strip of the whole charset.
    pub preview: Vec<u8>,
}

impl Artifacts {
    /// Writes `<name>.h`, `<name>.c` and `<name>.png` into `out_dir`.
    pub fn write(&self, out_dir: &Path) -> Result<(), CastError> {
        self.write_one(out_dir, "h", self.header.as_bytes())?;
        self.write_one(out_dir, "c", self.source.as_bytes())?;
        self.write_one(out_dir, "png", &self.preview)
    }

    fn write_one(&self, out_dir: &Path, extension: &str, bytes: &[u8]) -> Result<(), CastError> {
        let path = out_dir.join(format!("{}.{extension}", self.font_name));
        std::fs::write(&path, bytes).map_err(|source| CastError::Write { path, source })
    }
}

/// Runs the whole conversion against an already loaded font.
///
/// `name` is the identifier the emitted symbols are derived from, usually
/// the result of [`font_identifier`]. Nothing touches the filesystem
/// here; call [`Artifacts::write`] with the result.
pub fn cast_font(
    name: &str,
    size: u32,
    charset_text: &str,
    font: &impl Rasterizer,
) -> Result<Artifacts, CastError> {
    let charset = Charset::from_text(charset_text, font);
    let layout = Layout::measure(&charset, font);
    let descriptor = pack::pack_charset(name, size, &charset, &layout, font)?;
    let header = emit::header(&descriptor);
    let source = emit::source(&descriptor);
    let preview = preview::render(&charset, &layout, font)?;
    log::info!(
        "Cast {} glyphs into {} packed words for {}",
        descriptor.glyphs.len(),
        descriptor.data.len(),
        descriptor.name
    );
    Ok(Artifacts {
        font_name: descriptor.name,
        header,
        source,
        preview,
    })
}

/// Derives the emitted font identifier from the font path and pixel
/// size: the file stem with the size appended, `-` mapped to `_` so the
/// result stays a valid C identifier.
pub fn font_identifier(font_path: &Path, size: u32) -> String {
    let stem = font_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("font");
    format!("{stem}_{size}").replace('-', "_")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identifier_from_path_and_size() {
        assert_eq!(
            font_identifier(Path::new("fonts/Tamsyn5x9r.pcf"), 9),
            "Tamsyn5x9r_9"
        );
        assert_eq!(
            font_identifier(Path::new("/usr/share/fonts/DejaVu-Sans-Mono.ttf"), 16),
            "DejaVu_Sans_Mono_16"
        );
    }

    #[test]
    fn default_charset_is_printable_ascii() {
        let chars: Vec<char> = DEFAULT_CHARSET
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .collect();
        assert_eq!(chars.len(), 95);
        assert!(chars.iter().all(|c| (' '..='~').contains(c)));
    }
}
