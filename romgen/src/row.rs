//! Conversion between 16-bit font rows and their textual ROM representation.
use core::{fmt, ops::Deref};

/// Number of characters in a ROM line, not counting the line terminator.
pub const ROM_LINE_WIDTH: usize = u16::BITS as usize;

/// One row of a ROM image: sixteen ASCII `0`/`1` characters, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RomLine([u8; ROM_LINE_WIDTH]);

impl RomLine {
    /// Renders `row` with bit 15 at position 0 and bit 0 at position 15.
    pub const fn from_row(row: u16) -> Self {
        let mut line = [b'0'; ROM_LINE_WIDTH];
        let mut j = 0;
        while j < ROM_LINE_WIDTH {
            if row & (1 << j) != 0 {
                line[ROM_LINE_WIDTH - 1 - j] = b'1';
            }
            j += 1;
        }
        Self(line)
    }

    /// Combines a high and a low byte into a row and renders it.
    pub const fn from_pair(high: u8, low: u8) -> Self {
        Self::from_row(u16::from_be_bytes([high, low]))
    }

    /// The row this line encodes.
    pub fn row(&self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, bit| (acc << 1) | u16::from(*bit == b'1'))
    }

    /// The line as text, without a terminator.
    pub fn as_str(&self) -> &str {
        // Only ever filled with b'0' and b'1'.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The raw ASCII digits.
    pub fn as_bytes(&self) -> &[u8; ROM_LINE_WIDTH] {
        &self.0
    }
}

impl Deref for RomLine {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RomLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u16> for RomLine {
    fn from(row: u16) -> Self {
        Self::from_row(row)
    }
}

/// Reads a ROM line back into its row value.
///
/// Surrounding whitespace is ignored, so a line still carrying its terminator is accepted. Between one
/// and [`ROM_LINE_WIDTH`] binary digits are allowed; shorter lines are read as the low bits.
pub fn parse_rom_line(line: &str) -> Option<u16> {
    let digits = line.trim();
    if digits.is_empty()
        || digits.len() > ROM_LINE_WIDTH
        || !digits.bytes().all(|b| b == b'0' || b == b'1')
    {
        return None;
    }
    u16::from_str_radix(digits, 2).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rows() {
        let cases = [
            ((0x00, 0x00), "0000000000000000"),
            ((0xFF, 0xFF), "1111111111111111"),
            ((0xA5, 0x3C), "1010010100111100"),
            ((0x00, 0x01), "0000000000000001"),
            ((0x80, 0x00), "1000000000000000"),
        ];
        for ((high, low), expected) in cases {
            let line = RomLine::from_pair(high, low);
            assert_eq!(line.as_str(), expected, "Failed for {:#04x} {:#04x}", high, low);
        }
    }

    #[test]
    fn test_high_bit_not_sign_extended() {
        // A high byte >= 0x80 must only ever set bit 15, never anything above or below it.
        let line = RomLine::from_pair(0x80, 0x7F);
        assert_eq!(&*line, "1000000001111111");
        let line = RomLine::from_pair(0x00, 0x80);
        assert_eq!(&*line, "0000000010000000");
    }

    #[test]
    fn test_every_row_is_binary_and_reversible() {
        for row in 0..=u16::MAX {
            let line = RomLine::from_row(row);
            assert_eq!(line.len(), ROM_LINE_WIDTH);
            assert!(line.bytes().all(|b| b == b'0' || b == b'1'));
            assert_eq!(line.row(), row);
            assert_eq!(parse_rom_line(&line), Some(row));
        }
    }

    #[test]
    fn test_parse_rom_line() {
        assert_eq!(parse_rom_line("1010010100111100\n"), Some(0xA53C));
        assert_eq!(parse_rom_line("  0000000000000001\r\n"), Some(1));
        assert_eq!(parse_rom_line("101"), Some(0b101));
        assert_eq!(parse_rom_line(""), None);
        assert_eq!(parse_rom_line("\n"), None);
        assert_eq!(parse_rom_line("10x1"), None);
        assert_eq!(parse_rom_line("+101"), None);
        assert_eq!(parse_rom_line("10000000000000000"), None);
    }

    #[test]
    fn test_display_matches_str() {
        let line = RomLine::from(0x1234);
        assert_eq!(line.to_string(), "0001001000110100");
    }
}
