use std::io;
use std::result;

use thiserror::Error;

/// Specifies the different classes of errors which may occur.
///
/// Only the entry point and table reader layers produce errors. Decoding
/// structures into an [`Inventory`](crate::Inventory) never fails as a whole.
#[derive(Debug, Error)]
pub enum Error {
    /// Indicates an error occurred while performing file I/O.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No SMBIOS entry point was detected.
    #[error("entry point not found")]
    EntryPointNotFound,

    /// An SMBIOS entry point was detected, but it could not be successfully
    /// parsed.
    #[error("invalid entry point: {reason}")]
    InvalidEntryPoint { reason: &'static str },

    /// An entry point region did not sum to zero.
    #[error("entry point checksum mismatch: expected 0x{expected:02x}, found 0x{found:02x}")]
    Checksum { expected: u8, found: u8 },

    /// The structure table ended in the middle of a structure.
    #[error("table truncated at offset {offset}: need {needed} bytes, {remaining} remain")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A structure header declared a length shorter than the header itself.
    #[error("structure 0x{handle:04x} has invalid length {length}")]
    InvalidLength { handle: u16, length: u8 },

    /// Fewer than 16 bytes were available to build a UUID.
    #[error("UUID field needs 16 bytes, got {len}")]
    ShortUuid { len: usize },
}

/// A Result type specialized for use with an Error.
pub type Result<T> = result::Result<T, Error>;
