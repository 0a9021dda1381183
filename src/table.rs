//! Frames a raw SMBIOS structure table into individual structures.

use std::io::Read;

use bytes::{Buf, Bytes};
use log::trace;

use crate::error::{Error, Result};

/// Type code of the structure which terminates an SMBIOS table.
pub const END_OF_TABLE: u8 = 127;

const HEADER_LEN: usize = 4;

/// Indicates the type of data contained within an SMBIOS structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub header_type: u8,
    pub length: u8,
    pub handle: u16,
}

/// Contains a single SMBIOS structure which can be interpreted using the SMBIOS
/// specification.
///
/// `formatted` excludes the 4-byte header, so the offsets published by the
/// specification are 4 bytes ahead of the index into it. `strings` holds the
/// string-set in table order; the 1-based SMBIOS string numbers map
/// to `strings[n - 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Structure {
    pub header: Header,
    pub formatted: Vec<u8>,
    pub strings: Vec<String>,
}

impl Structure {
    /// Builds a structure from its parts, deriving the header length from the
    /// formatted block.
    pub fn new(header_type: u8, handle: u16, formatted: Vec<u8>, strings: Vec<String>) -> Self {
        let length = (formatted.len() + HEADER_LEN).min(u8::MAX as usize) as u8;

        Structure {
            header: Header {
                header_type,
                length,
                handle,
            },
            formatted,
            strings,
        }
    }
}

/// Decodes an SMBIOS structure table held in memory.
pub struct Decoder<B: Buf> {
    buf: B,
    offset: usize,
}

impl Decoder<Bytes> {
    /// Reads an entire table from `stream` and prepares it for decoding.
    pub fn from_reader<R: Read>(mut stream: R) -> Result<Self> {
        let mut table = Vec::new();
        stream.read_to_end(&mut table)?;

        Ok(Decoder::new(Bytes::from(table)))
    }
}

impl<B: Buf> Decoder<B> {
    /// Creates a new Decoder over a buffer containing a structure table.
    pub fn new(buf: B) -> Self {
        Decoder { buf, offset: 0 }
    }

    /// Decodes structures until the end-of-table structure has been consumed
    /// or the buffer runs out.
    pub fn decode(&mut self) -> Result<Vec<Structure>> {
        let mut structures = Vec::new();

        while self.buf.has_remaining() {
            let structure = self.next_structure()?;
            let header_type = structure.header.header_type;

            trace!(
                "framed structure type {} handle 0x{:04x} ({} strings)",
                header_type,
                structure.header.handle,
                structure.strings.len()
            );

            structures.push(structure);

            if header_type == END_OF_TABLE {
                break;
            }
        }

        Ok(structures)
    }

    fn next_structure(&mut self) -> Result<Structure> {
        self.ensure(HEADER_LEN)?;

        let header = Header {
            header_type: self.buf.get_u8(),
            length: self.buf.get_u8(),
            handle: self.buf.get_u16_le(),
        };
        self.offset += HEADER_LEN;

        if (header.length as usize) < HEADER_LEN {
            return Err(Error::InvalidLength {
                handle: header.handle,
                length: header.length,
            });
        }

        let n = header.length as usize - HEADER_LEN;
        self.ensure(n)?;

        let mut formatted = vec![0; n];
        self.buf.copy_to_slice(&mut formatted);
        self.offset += n;

        let strings = self.parse_strings()?;

        Ok(Structure {
            header,
            formatted,
            strings,
        })
    }

    fn parse_strings(&mut self) -> Result<Vec<String>> {
        let mut strings = Vec::new();

        loop {
            let raw = self.read_until_nul()?;
            if !raw.is_empty() {
                strings.push(String::from_utf8_lossy(&raw).into_owned());
                continue;
            }

            // A structure without strings is still followed by two NULs.
            if strings.is_empty() {
                self.ensure(1)?;
                self.buf.advance(1);
                self.offset += 1;
            }

            return Ok(strings);
        }
    }

    fn read_until_nul(&mut self) -> Result<Vec<u8>> {
        let mut raw = Vec::new();

        loop {
            self.ensure(1)?;
            let b = self.buf.get_u8();
            self.offset += 1;

            if b == 0 {
                return Ok(raw);
            }

            raw.push(b);
        }
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.buf.remaining();
        if remaining < needed {
            return Err(Error::Truncated {
                offset: self.offset,
                needed,
                remaining,
            });
        }

        Ok(())
    }
}
