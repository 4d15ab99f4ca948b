//! Translation of `.rom` images into `.mem` files for `$readmemh`-style memory initialization.
//!
//! A `.mem` file starts with the address marker `@0000` followed by one four-digit lowercase hex word
//! per line.
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use log::{debug, info};

use crate::{convert::write_output, error::MemError, row::parse_rom_line};

/// Address marker written at the top of every `.mem` file.
pub const MEM_START_ADDRESS: &str = "@0000";

/// Reads ROM lines from `input` and writes the `.mem` representation to `out`.
///
/// Blank lines are skipped. Returns the number of words written.
pub fn rom_to_mem<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<usize, MemError> {
    writeln!(out, "{}", MEM_START_ADDRESS).map_err(MemError::Write)?;

    let mut words = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(MemError::Read)?;
        if line.trim().is_empty() {
            continue;
        }
        let word = parse_rom_line(&line).ok_or_else(|| MemError::InvalidLine {
            line: index + 1,
            content: line.clone(),
        })?;
        writeln!(out, "{:04x}", word).map_err(MemError::Write)?;
        words += 1;
    }
    Ok(words)
}

/// Translates the `.rom` file at `rom` into a `.mem` file at `mem`.
///
/// The whole input is read and translated before `mem` is opened, so invalid input leaves an existing
/// `.mem` untouched and `rom` may name the same file as `mem`.
pub fn translate_file(rom: &Path, mem: &Path) -> Result<usize, MemError> {
    let input = File::open(rom).map_err(|source| MemError::InputUnavailable {
        path: rom.to_path_buf(),
        source,
    })?;
    let mut image = Vec::new();
    let words = rom_to_mem(BufReader::new(input), &mut image)?;
    debug!("Translated {} into {} bytes", rom.display(), image.len());

    write_output(mem, File::create(mem), |out| out.write_all(&image)).map_err(|source| {
        MemError::OutputUnavailable {
            path: mem.to_path_buf(),
            source,
        }
    })?;
    info!("Wrote {} words to {}", words, mem.display());
    Ok(words)
}
