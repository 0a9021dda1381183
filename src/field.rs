//! Offset-based access to the fields of a single structure.
//!
//! Offsets passed to [`Fields`] are the absolute offsets published by the
//! SMBIOS specification, which count the 4-byte structure header. Reads that
//! fall outside the formatted block yield zero: firmware routinely publishes
//! structures shorter than the newest definition of their type.

use byteorder::{ByteOrder, LE};

use crate::table::Structure;

const HEADER_LEN: usize = 4;

/// Firmware placeholder which carries no information.
const OEM_PLACEHOLDER: &str = "to be filled by o.e.m.";

/// Reads fields out of a structure's formatted block and string table.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    formatted: &'a [u8],
    strings: &'a [String],
}

impl<'a> Fields<'a> {
    pub fn new(structure: &'a Structure) -> Self {
        Fields {
            formatted: &structure.formatted,
            strings: &structure.strings,
        }
    }

    /// Length of the structure including its header, as SMBIOS counts it.
    pub fn length(&self) -> usize {
        self.formatted.len() + HEADER_LEN
    }

    /// Returns `width` raw bytes at `offset`, or `None` if they are not all
    /// present.
    pub fn bytes(&self, offset: usize, width: usize) -> Option<&'a [u8]> {
        let start = offset.checked_sub(HEADER_LEN)?;
        self.formatted.get(start..start.checked_add(width)?)
    }

    /// Retrieves an 8-bit unsigned integer.
    pub fn byte(&self, offset: usize) -> u8 {
        self.bytes(offset, 1).map_or(0, |b| b[0])
    }

    /// Retrieves a 16-bit little-endian unsigned integer.
    pub fn word(&self, offset: usize) -> u16 {
        self.bytes(offset, 2).map_or(0, LE::read_u16)
    }

    /// Retrieves a 32-bit little-endian unsigned integer.
    pub fn dword(&self, offset: usize) -> u32 {
        self.bytes(offset, 4).map_or(0, LE::read_u32)
    }

    /// Retrieves a 64-bit little-endian unsigned integer.
    pub fn qword(&self, offset: usize) -> u64 {
        self.bytes(offset, 8).map_or(0, LE::read_u64)
    }

    /// Resolves the string number stored at `offset`. Missing strings and
    /// placeholders resolve to an empty string.
    pub fn string(&self, offset: usize) -> String {
        string_at(self.strings, self.byte(offset))
    }

    /// Returns every string in the table, normalized, in table order.
    pub fn strings(&self) -> Vec<String> {
        self.strings.iter().map(|s| normalize(s)).collect()
    }
}

/// Maps a 1-based string number to its normalized entry in `strings`.
pub fn string_at(strings: &[String], index: u8) -> String {
    match index {
        0 => String::new(),
        n => strings
            .get(n as usize - 1)
            .map(|s| normalize(s))
            .unwrap_or_default(),
    }
}

fn normalize(s: &str) -> String {
    let trimmed = s.trim();

    if trimmed.eq_ignore_ascii_case(OEM_PLACEHOLDER) {
        return String::new();
    }

    trimmed.to_string()
}
