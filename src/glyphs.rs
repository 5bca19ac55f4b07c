//! Block bitmap font for the wordmark
//!
//! Each glyph is a 5x7 grid of square cells, drawn as solid blocks so the
//! wordmark keeps the chunky digital-clock look at every icon size without
//! relying on a system font.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Blank cells between two glyphs
pub const LETTER_SPACING: u32 = 1;

/// Width of a space character
const SPACE_WIDTH: u32 = 2;

// Rows top to bottom, bit 4 is the leftmost cell
const GLYPH_E: [u8; 7] = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111];
const GLYPH_I: [u8; 7] = [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111];
const GLYPH_R: [u8; 7] = [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001];
const GLYPH_Z: [u8; 7] = [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111];

fn glyph(c: char) -> Option<&'static [u8; 7]> {
    match c.to_ascii_uppercase() {
        'E' => Some(&GLYPH_E),
        'I' => Some(&GLYPH_I),
        'R' => Some(&GLYPH_R),
        'Z' => Some(&GLYPH_Z),
        _ => None,
    }
}

fn advance(c: char) -> u32 {
    if c == ' ' {
        SPACE_WIDTH
    } else {
        GLYPH_WIDTH
    }
}

/// Width of `text` in cells, including letter spacing but not trailing space
pub fn text_width(text: &str) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    let glyphs: u32 = text.chars().map(advance).sum();
    glyphs + LETTER_SPACING * (count - 1)
}

/// Filled cells of `text` as (column, row) pairs, origin at the top-left
///
/// Characters without a glyph leave a blank cell-wide gap.
pub fn text_cells(text: &str) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    let mut origin = 0;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        cells.push((origin + col, row as u32));
                    }
                }
            }
        }
        origin += advance(c) + LETTER_SPACING;
    }

    cells
}
