//! Error types for ROM generation and translation.
use std::{io, path::PathBuf};

/// The only way writing a ROM image can fail.
#[derive(thiserror::Error, Debug)]
pub enum RomError {
    /// The destination could not be created, opened or written.
    #[error("Output destination unavailable: {}", path.display())]
    OutputUnavailable {
        /// The requested destination.
        path: PathBuf,
        /// What the filesystem reported.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while translating a `.rom` file into a `.mem` file.
#[derive(thiserror::Error, Debug)]
pub enum MemError {
    /// The `.rom` file could not be opened.
    #[error("Unable to open input {}", path.display())]
    InputUnavailable {
        /// The `.rom` path.
        path: PathBuf,
        /// What the filesystem reported.
        #[source]
        source: io::Error,
    },
    /// The `.mem` file could not be created or written.
    #[error("Output destination unavailable: {}", path.display())]
    OutputUnavailable {
        /// The `.mem` path.
        path: PathBuf,
        /// What the filesystem reported.
        #[source]
        source: io::Error,
    },
    /// Reading a line of the input failed.
    #[error("Failed to read input")]
    Read(#[source] io::Error),
    /// Writing to the output writer failed.
    #[error("Failed to write output")]
    Write(#[source] io::Error),
    /// A line held something other than up to sixteen binary digits.
    #[error("Invalid ROM line {line}: {content:?}")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
}
