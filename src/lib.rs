//! Generates the Fixed-16x16 font ROM image and its `.mem` translation.
use std::{
    error::Error,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use romgen::{FontData, MemError, RomError};

/// Build-time configuration for generating the font ROM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the ROM image is written.
    pub output: PathBuf,
    /// Name of the embedded font.
    pub font_name: &'static str,
}

impl Default for Config {
    /// The fixed configuration: `Fixed-16x16.rom` in the working directory.
    fn default() -> Self {
        Config {
            output: PathBuf::from(format!("{}.rom", glyphs::FONT_NAME)),
            font_name: glyphs::FONT_NAME,
        }
    }
}

impl Config {
    /// Returns a configuration writing into `dir` instead of the working directory.
    pub fn in_dir(dir: &Path) -> Config {
        let default = Config::default();
        Config {
            output: dir.join(&default.output),
            ..default
        }
    }
}

/// The embedded font table as converter input.
pub fn font() -> FontData<'static> {
    FontData::new(&glyphs::FONT[..glyphs::FONT_SIZE])
}

/// Writes the ROM image for the embedded font. Returns the number of lines written.
pub fn generate(cfg: &Config) -> Result<usize, RomError> {
    log::debug!("Converting {} into {}", cfg.font_name, cfg.output.display());
    romgen::convert(font(), &cfg.output)
}

/// Translates an existing ROM image into a `.mem` file.
pub fn translate(rom: &Path, mem: &Path) -> Result<usize, MemError> {
    romgen::mem::translate_file(rom, mem)
}

/// Installs the logger used by the binaries. The level is fixed; nothing is read from the environment.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .init();
}

/// Logs `err` and every error in its source chain.
pub fn report(err: &dyn Error) {
    log::error!("{}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        log::error!("  caused by: {}", cause);
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs, process,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    /// A scratch directory that is removed when it goes out of scope.
    struct ScratchDir {
        path: PathBuf,
    }

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "fontrom-{}-{}-{}",
                process::id(),
                NEXT_DIR.fetch_add(1, Ordering::Relaxed),
                name
            ));
            fs::create_dir_all(&path).expect("Failed to create scratch directory");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }

        fn join(&self, file: &str) -> PathBuf {
            self.path.join(file)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.output, PathBuf::from("Fixed-16x16.rom"));
        assert_eq!(cfg.font_name, "Fixed-16x16");
    }

    #[test]
    fn test_font_is_whole_table() {
        assert_eq!(font().len(), glyphs::FONT_SIZE);
        assert_eq!(font().row_count(), glyphs::FONT_SIZE / 2);
    }

    #[test]
    fn test_generate_embedded_font() {
        let dir = ScratchDir::new("generate");
        let cfg = Config::in_dir(dir.path());
        let lines = generate(&cfg).unwrap();
        assert_eq!(lines, glyphs::FONT_SIZE / 2);

        let rom = fs::read_to_string(&cfg.output).unwrap();
        let rom: Vec<&str> = rom.lines().collect();
        assert_eq!(rom.len(), lines);

        // Row 1 of 'A' is the top of the letter.
        let a = b'A' as usize * glyphs::GLYPH_HEIGHT;
        assert_eq!(rom[a], "0000000000000000");
        assert_eq!(rom[a + 1], "0000011111100000");
        assert_eq!(rom[a + 9], "0001111111111000");
    }

    #[test]
    fn test_generate_then_translate() {
        let dir = ScratchDir::new("translate");
        let cfg = Config::in_dir(dir.path());
        generate(&cfg).unwrap();
        let mem = dir.join("font.mem");
        let words = translate(&cfg.output, &mem).unwrap();
        assert_eq!(words, glyphs::FONT_SIZE / 2);

        let mem = fs::read_to_string(&mem).unwrap();
        let mut lines = mem.lines();
        assert_eq!(lines.next(), Some("@0000"));
        for (k, word) in lines.enumerate() {
            let expected = u16::from_be_bytes([glyphs::FONT[2 * k], glyphs::FONT[2 * k + 1]]);
            assert_eq!(word, format!("{:04x}", expected));
        }
    }

    #[test]
    fn test_generate_reports_unavailable_output() {
        let dir = ScratchDir::new("unavailable");
        let cfg = Config {
            output: dir.join("no-such-dir").join("font.rom"),
            ..Config::default()
        };
        assert!(matches!(
            generate(&cfg),
            Err(RomError::OutputUnavailable { .. })
        ));
    }
}
