//! The embedded Fixed-16x16 bitmap font.
//!
//! Each glyph is 16 rows of 16 pixels. A row is stored as two bytes, high byte first, and the MSB of
//! the high byte is the left-most pixel. The table is trusted as-is; nothing here validates it.
#![cfg_attr(not(test), no_std)]

mod font16x16;

pub use font16x16::FONT;

/// Name of the font, also used as the stem of the generated ROM file.
pub const FONT_NAME: &str = "Fixed-16x16";
/// Pixel height of a glyph (rows per glyph).
pub const GLYPH_HEIGHT: usize = 16;
/// Bytes used by one glyph.
pub const GLYPH_BYTES: usize = GLYPH_HEIGHT * 2;
/// Number of glyphs in the table. Only 7-bit ASCII is covered.
pub const GLYPH_COUNT: usize = 128;
/// Total byte count of [`FONT`].
pub const FONT_SIZE: usize = GLYPH_COUNT * GLYPH_BYTES;

const FALLBACK: u8 = b'?';

/// Gets the bytes of a single glyph. If the character is not in the table, it returns the question mark.
pub fn glyph(c: u8) -> &'static [u8; GLYPH_BYTES] {
    let c = if (c as usize) < GLYPH_COUNT { c } else { FALLBACK };
    let start = c as usize * GLYPH_BYTES;
    FONT[start..start + GLYPH_BYTES]
        .try_into()
        .expect("glyph slice has a fixed length")
}
