//! Font table to ROM image conversion.
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, info, warn};

use crate::{error::RomError, row::RomLine};

/// A read-only view of a font table: a flat run of bytes where every two bytes form one big-endian
/// 16-bit row.
///
/// The table is trusted. An odd trailing byte is not part of any row and is never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

impl<'a> FontData<'a> {
    /// Wraps a font table.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Byte length of the table.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the table holds no bytes at all.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of complete 16-bit rows.
    pub const fn row_count(&self) -> usize {
        self.bytes.len() / 2
    }

    /// The underlying table.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Iterates over the rows in table order, combining each pair as `(high << 8) | low`.
    pub fn rows(&self) -> impl Iterator<Item = u16> + 'a {
        let bytes = self.bytes;
        bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

/// Writes one ROM line per row of `font` to `out`, each followed by `\n`.
///
/// Returns the number of lines written.
pub fn write_rom<W: Write>(font: FontData<'_>, out: &mut W) -> io::Result<usize> {
    if font.len() % 2 != 0 {
        warn!(
            "Font table has an odd length ({} bytes); the trailing byte is ignored",
            font.len()
        );
    }
    let mut lines = 0;
    for row in font.rows() {
        out.write_all(RomLine::from_row(row).as_bytes())?;
        out.write_all(b"\n")?;
        lines += 1;
    }
    Ok(lines)
}

/// Converts `font` into a ROM image at `path`, replacing anything already there.
///
/// Failing to create the file aborts before anything is written. If a write fails afterwards, the
/// partially written file is removed again, so an error never leaves a usable image behind.
pub fn convert(font: FontData<'_>, path: &Path) -> Result<usize, RomError> {
    let lines = write_output(path, File::create(path).map(BufWriter::new), |out| {
        write_rom(font, out)
    })
    .map_err(|source| RomError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} ROM lines to {}", lines, path.display());
    Ok(lines)
}

/// Runs `body` against the freshly opened `out` for `path` and flushes it.
///
/// An open failure is returned untouched. Any later failure discards what was written to `path`.
pub(crate) fn write_output<W, T, F>(path: &Path, out: io::Result<W>, body: F) -> io::Result<T>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<T>,
{
    let mut out = out?;
    debug!("Opened {} for writing", path.display());

    let written = body(&mut out).and_then(|value| {
        out.flush()?;
        Ok(value)
    });

    // The handle is closed here on both paths.
    drop(out);

    if written.is_err() {
        discard_partial(path);
    }
    written
}

/// Removes a partially written output, but only if it is a regular file. Device nodes, symlinks and
/// anything else the caller pointed us at are left alone.
fn discard_partial(path: &Path) {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_file() => {
            if let Err(e) = fs::remove_file(path) {
                warn!("Unable to remove partial output {}: {}", path.display(), e);
            }
        }
        Ok(_) => debug!("Leaving non-regular output {} in place", path.display()),
        Err(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{row::parse_rom_line, test_common::ScratchDir};

    fn render(bytes: &[u8]) -> String {
        let mut out = Vec::new();
        write_rom(FontData::new(bytes), &mut out).expect("Writing to a Vec cannot fail");
        String::from_utf8(out).expect("ROM output is ASCII")
    }

    /// A table that exercises every bit position and both signs of each byte.
    fn sample_table() -> Vec<u8> {
        (0..=255u8)
            .flat_map(|b| [b, b.reverse_bits() ^ 0x5A])
            .collect()
    }

    #[test]
    fn test_single_zero_row() {
        assert_eq!(render(&[0x00, 0x00]), "0000000000000000\n");
    }

    #[test]
    fn test_single_full_row() {
        assert_eq!(render(&[0xFF, 0xFF]), "1111111111111111\n");
    }

    #[test]
    fn test_mixed_row() {
        assert_eq!(render(&[0xA5, 0x3C]), "1010010100111100\n");
    }

    #[test]
    fn test_rows_keep_order() {
        assert_eq!(
            render(&[0x00, 0x01, 0x80, 0x00]),
            "0000000000000001\n1000000000000000\n"
        );
    }

    #[test]
    fn test_line_count_and_shape() {
        let table = sample_table();
        let output = render(&table);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), table.len() / 2);
        for line in &lines {
            assert_eq!(line.len(), 16);
            assert!(line.bytes().all(|b| b == b'0' || b == b'1'), "{}", line);
        }
    }

    #[test]
    fn test_lines_reproduce_source_pairs() {
        let table = sample_table();
        let output = render(&table);
        for (k, line) in output.lines().enumerate() {
            let row = parse_rom_line(line).expect("Line should parse");
            let [high, low] = row.to_be_bytes();
            assert_eq!((high, low), (table[2 * k], table[2 * k + 1]), "Mismatch at line {}", k);
        }
    }

    #[test]
    fn test_write_rom_reports_lines() {
        let mut out = Vec::new();
        let lines = write_rom(FontData::new(&[1, 2, 3, 4, 5, 6]), &mut out).unwrap();
        assert_eq!(lines, 3);
    }

    #[test]
    fn test_odd_trailing_byte_ignored() {
        assert_eq!(render(&[0xFF, 0x00, 0x7F]), "1111111100000000\n");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render(&[]), "");
        assert!(FontData::new(&[]).is_empty());
    }

    #[test]
    fn test_font_data_rows() {
        let font = FontData::from(&[0x12u8, 0x34, 0xFE, 0xDC][..]);
        assert_eq!(font.len(), 4);
        assert_eq!(font.row_count(), 2);
        assert_eq!(font.rows().collect::<Vec<_>>(), vec![0x1234, 0xFEDC]);
    }

    #[test]
    fn test_convert_writes_file() {
        let dir = ScratchDir::new("convert");
        let path = dir.join("font.rom");
        let lines = convert(FontData::new(&[0xA5, 0x3C, 0x00, 0x01]), &path).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1010010100111100\n0000000000000001\n"
        );
    }

    #[test]
    fn test_convert_truncates_existing_file() {
        let dir = ScratchDir::new("truncate");
        let path = dir.join("font.rom");
        fs::write(&path, "stale content that is much longer than one line\n".repeat(8)).unwrap();
        convert(FontData::new(&[0xFF, 0xFF]), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1111111111111111\n");
    }

    #[test]
    fn test_convert_is_deterministic() {
        let dir = ScratchDir::new("deterministic");
        let table = sample_table();
        let first = dir.join("first.rom");
        let second = dir.join("second.rom");
        convert(FontData::new(&table), &first).unwrap();
        convert(FontData::new(&table), &second).unwrap();
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_convert_unavailable_destination() {
        let dir = ScratchDir::new("unavailable");
        let path = dir.join("missing").join("font.rom");
        let err = convert(FontData::new(&[0x00, 0x00]), &path).unwrap_err();
        match err {
            RomError::OutputUnavailable { path: reported, .. } => assert_eq!(reported, path),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_convert_onto_directory_fails() {
        let dir = ScratchDir::new("directory");
        let err = convert(FontData::new(&[0x00, 0x00]), dir.path());
        assert!(matches!(err, Err(RomError::OutputUnavailable { .. })));
        assert!(dir.path().is_dir());
    }

    /// A writer that accepts a fixed number of bytes and then fails.
    struct ShortWriter {
        remaining: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = ScratchDir::new("partial");
        let path = dir.join("font.rom");
        fs::write(&path, "1111111111111111\n").unwrap();

        let out = Ok(ShortWriter { remaining: 20 });
        let err = write_output(&path, out, |w| {
            write_rom(FontData::new(&[0x00, 0x00, 0xFF, 0xFF]), w)
        })
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_open_touches_nothing() {
        let dir = ScratchDir::new("failed-open");
        let path = dir.join("font.rom");
        fs::write(&path, "keep\n").unwrap();

        let out: io::Result<ShortWriter> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = write_output(&path, out, |w| write_rom(FontData::new(&[0x00, 0x00]), w)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_write_keeps_non_regular_output() {
        let dir = ScratchDir::new("symlink");
        let target = dir.join("target.rom");
        let link = dir.join("link.rom");
        fs::write(&target, "keep\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let out = Ok(ShortWriter { remaining: 0 });
        assert!(write_output(&link, out, |w| write_rom(FontData::new(&[0x00, 0x00]), w)).is_err());
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep\n");
    }

    #[test]
    fn test_write_rom_propagates_write_errors() {
        let mut out = ShortWriter { remaining: 20 };
        let err = write_rom(FontData::new(&[0x00, 0x00, 0xFF, 0xFF]), &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    }
}
