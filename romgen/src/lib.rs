//! ROM image generation for bitmap fonts.
//!
//! A font is handed in as a flat byte table ([`FontData`]) and written out as one line of sixteen
//! `0`/`1` characters per 16-bit row. The resulting `.rom` file can be further translated into a
//! hexadecimal `.mem` image with [`mem::translate_file`].

pub mod convert;
pub mod error;
pub mod mem;
pub mod row;

pub use convert::{convert, write_rom, FontData};
pub use error::{MemError, RomError};
pub use row::{parse_rom_line, RomLine, ROM_LINE_WIDTH};

#[cfg(test)]
pub(crate) mod test_common {
    use std::{
        fs,
        path::{Path, PathBuf},
        sync::atomic::{AtomicUsize, Ordering},
    };

    mod log_internal {
        use ctor::ctor;

        #[ctor]
        static INIT: () = {
            env_logger::builder().is_test(true).init();
        };
    }

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    /// A scratch directory that is removed when it goes out of scope.
    pub struct ScratchDir {
        path: PathBuf,
    }

    impl ScratchDir {
        pub fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "romgen-{}-{}-{}",
                std::process::id(),
                NEXT_DIR.fetch_add(1, Ordering::Relaxed),
                name
            ));
            fs::create_dir_all(&path).expect("Failed to create scratch directory");
            Self { path }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        pub fn join(&self, file: &str) -> PathBuf {
            self.path.join(file)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}
