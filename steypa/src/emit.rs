//! Rendering of a finished [`FontDescriptor`] into C declarations.
//!
//! Pure string formatting; the only decisions here are the literal
//! formats, kept as constants so the emitted shape is testable in
//! isolation from the packing. The data table is emitted first, then the
//! descriptor table, then the font aggregate, because each references
//! the previous one by name.

use crate::pack::{FontDescriptor, WORD_BITS};

/// Hex digits per packed word literal.
const WORD_HEX_DIGITS: usize = WORD_BITS / 4;
/// Packed words per data-table line.
const WORDS_PER_LINE: usize = 4;

/// Renders the `.c` contents.
pub fn source(font: &FontDescriptor) -> String {
    format!(
        "\n#include \"{}.h\"\n\n{}\n\n{}\n\n{}\n\n",
        font.name,
        data_table(font),
        chars_table(font),
        font_aggregate(font)
    )
}

/// Renders the `.h` contents: include guard plus the one extern symbol.
pub fn header(font: &FontDescriptor) -> String {
    let guard = font.name.to_uppercase();
    format!(
        "\n#ifndef _{guard}_\n#define _{guard}_\n\n#include <stdint.h>\n#include \"fonts.h\"\n\nextern const font_t font_{};\n\n#endif\n",
        font.name
    )
}

fn data_table_name(font: &FontDescriptor) -> String {
    format!("mono_chars_data_{}", font.name)
}

fn chars_table_name(font: &FontDescriptor) -> String {
    format!("mono_chars_{}", font.name)
}

/// The packed pixel-data array, one comment line per glyph, words in
/// rows of [`WORDS_PER_LINE`].
fn data_table(font: &FontDescriptor) -> String {
    let mut table = format!(
        "static const uint{WORD_BITS}_t {}[] = {{",
        data_table_name(font)
    );
    for (index, glyph) in font.glyphs.iter().enumerate() {
        let end = font
            .glyphs
            .get(index + 1)
            .map_or(font.data.len(), |next| next.data_offset);
        let ch = char::from_u32(glyph.code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
        table.push_str(&format!("\n\t/* '{ch}' */"));
        for line in font.data[glyph.data_offset..end].chunks(WORDS_PER_LINE) {
            let words: Vec<String> = line.iter().map(|&word| word_literal(word)).collect();
            table.push_str("\n\t");
            table.push_str(&words.join(" "));
        }
    }
    if table.ends_with(',') {
        table.pop();
    }
    table.push_str("\n};");
    table
}

/// The glyph descriptor array, in charset order.
fn chars_table(font: &FontDescriptor) -> String {
    let mut table = format!("static const char_t {}[] = {{\n\t", chars_table_name(font));
    let data_name = data_table_name(font);
    let entries: Vec<String> = font
        .glyphs
        .iter()
        .map(|glyph| {
            let coords: Vec<String> = glyph.bbox.iter().map(|&v| bbox_coord(v)).collect();
            format!(
                "{{\n\t\t.utf8_value = {},\n\t\t.bbox       = {{ {} }},\n\t\t.data       = &{}[{}]\n\t}}",
                glyph.code_point,
                coords.join(","),
                data_name,
                glyph.data_offset
            )
        })
        .collect();
    table.push_str(&entries.join(", "));
    table.push_str("\n};");
    table
}

fn font_aggregate(font: &FontDescriptor) -> String {
    format!(
        "const font_t font_{} = {{\n\
         \t.fontsize       = {},\n\
         \t.lineheight     = {},\n\
         \t.ascent         = {},\n\
         \t.descent        = {},\n\
         \t.charwidth      = {},\n\
         \t.char_count     = {},\n\
         \t.chars          = {},\n\
         \t.chars_data     = {},\n\
         }};",
        font.name,
        font.size,
        font.layout.line_height,
        font.layout.ascent,
        font.layout.descent,
        font.layout.advance_width,
        font.glyphs.len(),
        chars_table_name(font),
        data_table_name(font)
    )
}

fn word_literal(word: u32) -> String {
    format!("0x{word:0digits$x},", digits = WORD_HEX_DIGITS)
}

/// One bounding-box coordinate: no decimals, the sign position filled
/// with a space for non-negative values.
fn bbox_coord(value: f32) -> String {
    if value < 0.0 {
        format!("{value:.0}")
    } else {
        format!(" {value:.0}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metrics::Layout;
    use crate::pack::GlyphDescriptor;
    use pretty_assertions::assert_eq;

    fn sample_font() -> FontDescriptor {
        FontDescriptor {
            name: "test_9".into(),
            size: 9,
            layout: Layout {
                line_height: 9,
                advance_width: 6,
                ascent: 7,
                descent: 2,
                origin_y: 2,
            },
            glyphs: vec![
                GlyphDescriptor {
                    code_point: 'A' as u32,
                    bbox: [1.0, 0.0, 5.0, 5.0],
                    data_offset: 0,
                },
                GlyphDescriptor {
                    code_point: 'g' as u32,
                    bbox: [0.5, 2.0, 4.5, 7.0],
                    data_offset: 1,
                },
                GlyphDescriptor {
                    code_point: ' ' as u32,
                    bbox: [0.0; 4],
                    data_offset: 2,
                },
            ],
            data: vec![0x0009_9f96, 0x0006_8e9e],
        }
    }

    #[test]
    fn coordinates_reserve_the_sign_position() {
        assert_eq!(bbox_coord(1.0), " 1");
        assert_eq!(bbox_coord(-3.0), "-3");
        assert_eq!(bbox_coord(10.0), " 10");
        assert_eq!(bbox_coord(-10.0), "-10");
        assert_eq!(bbox_coord(0.0), " 0");
    }

    #[test]
    fn coordinates_round_half_to_even() {
        assert_eq!(bbox_coord(0.5), " 0");
        assert_eq!(bbox_coord(1.5), " 2");
        assert_eq!(bbox_coord(2.5), " 2");
        assert_eq!(bbox_coord(-0.5), "-0");
    }

    #[test]
    fn word_literals_are_zero_padded_hex() {
        assert_eq!(word_literal(0), "0x00000000,");
        assert_eq!(word_literal(0x99f96), "0x00099f96,");
        assert_eq!(word_literal(u32::MAX), "0xffffffff,");
    }

    #[test]
    fn data_table_layout() {
        let expected = "static const uint32_t mono_chars_data_test_9[] = {\n\
                        \t/* 'A' */\n\
                        \t0x00099f96,\n\
                        \t/* 'g' */\n\
                        \t0x00068e9e,\n\
                        \t/* ' ' */\n\
                        };";
        assert_eq!(data_table(&sample_font()), expected);
    }

    #[test]
    fn data_table_wraps_after_four_words() {
        let mut font = sample_font();
        font.glyphs.truncate(1);
        font.data = vec![0x1, 0x2, 0x3, 0x4, 0x5];
        let expected = "static const uint32_t mono_chars_data_test_9[] = {\n\
                        \t/* 'A' */\n\
                        \t0x00000001, 0x00000002, 0x00000003, 0x00000004,\n\
                        \t0x00000005\n\
                        };";
        assert_eq!(data_table(&font), expected);
    }

    #[test]
    fn chars_table_layout() {
        let expected = "static const char_t mono_chars_test_9[] = {\n\
                        \t{\n\
                        \t\t.utf8_value = 65,\n\
                        \t\t.bbox       = {  1, 0, 5, 5 },\n\
                        \t\t.data       = &mono_chars_data_test_9[0]\n\
                        \t}, {\n\
                        \t\t.utf8_value = 103,\n\
                        \t\t.bbox       = {  0, 2, 4, 7 },\n\
                        \t\t.data       = &mono_chars_data_test_9[1]\n\
                        \t}, {\n\
                        \t\t.utf8_value = 32,\n\
                        \t\t.bbox       = {  0, 0, 0, 0 },\n\
                        \t\t.data       = &mono_chars_data_test_9[2]\n\
                        \t}\n\
                        };";
        assert_eq!(chars_table(&sample_font()), expected);
    }

    #[test]
    fn aggregate_binds_the_tables_together() {
        let expected = "const font_t font_test_9 = {\n\
                        \t.fontsize       = 9,\n\
                        \t.lineheight     = 9,\n\
                        \t.ascent         = 7,\n\
                        \t.descent        = 2,\n\
                        \t.charwidth      = 6,\n\
                        \t.char_count     = 3,\n\
                        \t.chars          = mono_chars_test_9,\n\
                        \t.chars_data     = mono_chars_data_test_9,\n\
                        };";
        assert_eq!(font_aggregate(&sample_font()), expected);
    }

    #[test]
    fn header_guards_the_extern_symbol() {
        let expected = "\n#ifndef _TEST_9_\n#define _TEST_9_\n\n\
                        #include <stdint.h>\n#include \"fonts.h\"\n\n\
                        extern const font_t font_test_9;\n\n#endif\n";
        assert_eq!(header(&sample_font()), expected);
    }

    #[test]
    fn source_orders_tables_before_the_aggregate() {
        let source = source(&sample_font());
        assert!(source.starts_with("\n#include \"test_9.h\"\n"));
        let data_at = source.find("mono_chars_data_test_9[] =").unwrap();
        let chars_at = source.find("mono_chars_test_9[] =").unwrap();
        let aggregate_at = source.find("const font_t font_test_9 =").unwrap();
        assert!(data_at < chars_at && chars_at < aggregate_at);
        assert!(source.ends_with("};\n\n"));
    }
}
