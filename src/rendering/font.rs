//! Glyph lookup over the embedded 8x8 bitmap font.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

/// Width and height of a source glyph in pixels.
pub const GLYPH_SIZE: u32 = 8;

const BLANK: [u8; 8] = [0; 8];

/// Bitmap rows for `c`. Bit `n` of a row is column `n`, left to right.
///
/// Control characters are blank; anything the font lacks falls back to `?`.
pub fn glyph(c: char) -> [u8; 8] {
    if c.is_control() {
        return BLANK;
    }
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or(BLANK)
}

/// Whether the glyph pixel at (`gx`, `gy`) is set.
pub fn is_set(rows: &[u8; 8], gx: u32, gy: u32) -> bool {
    gx < GLYPH_SIZE && gy < GLYPH_SIZE && rows[gy as usize] & (1 << gx) != 0
}
