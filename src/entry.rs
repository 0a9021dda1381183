//! SMBIOS entry point discovery and parsing.

use bytes::Buf;
use log::debug;

use crate::error::{Error, Result};
use crate::version::Version;

/// Physical address where the search for a legacy entry point begins.
pub const START_ADDRESS: u64 = 0x000f_0000;

/// Physical address where the search for a legacy entry point ends.
pub const END_ADDRESS: u64 = 0x000f_ffff;

/// Entry points are aligned on 16-byte paragraph boundaries.
pub const PARAGRAPH_SIZE: u64 = 16;

const ANCHOR_32: &[u8] = b"_SM_";
const ANCHOR_64: &[u8] = b"_SM3_";
const ANCHOR_DMI: &[u8] = b"_DMI_";

const LEN_32: usize = 31;
const LEN_64: usize = 24;

/// Possible entry point types and their contained structures.
#[derive(Debug, PartialEq)]
pub enum EntryPoint {
    /// A 32-bit (SMBIOS 2.1+) entry point.
    Bits32(Bits32),

    /// A 64-bit (SMBIOS 3.0+) entry point.
    Bits64(Bits64),
}

impl EntryPoint {
    /// Parses an entry point from the start of `buf`, verifying its checksums.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.starts_with(ANCHOR_64) {
            return Ok(EntryPoint::Bits64(Bits64::parse(buf)?));
        }

        if buf.starts_with(ANCHOR_32) {
            return Ok(EntryPoint::Bits32(Bits32::parse(buf)?));
        }

        Err(Error::InvalidEntryPoint {
            reason: "unrecognized anchor string",
        })
    }

    /// Provides the address of the SMBIOS table in system memory and its size
    /// in bytes. For 64-bit entry points the size is an upper bound.
    pub fn table(&self) -> (u64, usize) {
        match self {
            EntryPoint::Bits32(ep) => (
                u64::from(ep.structure_table_address),
                ep.structure_table_length as usize,
            ),
            EntryPoint::Bits64(ep) => (
                ep.structure_table_address,
                ep.structure_table_max_size as usize,
            ),
        }
    }

    /// Provides the SMBIOS version in use. 32-bit entry points do not carry a
    /// revision number, so it is always 0.
    pub fn version(&self) -> Version {
        match self {
            EntryPoint::Bits32(ep) => Version::new(ep.major, ep.minor, 0),
            EntryPoint::Bits64(ep) => Version::new(ep.major, ep.minor, ep.revision),
        }
    }
}

/// Contains the information found in a 32-bit SMBIOS entry point.
#[derive(Debug, PartialEq)]
pub struct Bits32 {
    pub checksum: u8,
    pub length: u8,
    pub major: u8,
    pub minor: u8,
    pub max_structure_size: u16,
    pub entry_point_revision: u8,
    pub formatted_area: [u8; 5],
    pub intermediate_checksum: u8,
    pub structure_table_length: u16,
    pub structure_table_address: u32,
    pub number_structures: u16,
    pub bcd_revision: u8,
}

impl Bits32 {
    fn parse(buf: &[u8]) -> Result<Self> {
        // Could potentially contain more data if we're reading from /dev/mem.
        if buf.len() < LEN_32 {
            return Err(Error::InvalidEntryPoint {
                reason: "32-bit entry point too short",
            });
        }

        let length = (buf[5] as usize).clamp(LEN_32, buf.len());
        verify_checksum(&buf[..length])?;

        if &buf[16..21] != ANCHOR_DMI {
            return Err(Error::InvalidEntryPoint {
                reason: "missing intermediate anchor",
            });
        }
        verify_checksum(&buf[16..LEN_32])?;

        // Skip the anchor string.
        let mut cursor = &buf[4..LEN_32];

        let checksum = cursor.get_u8();
        let length = cursor.get_u8();
        let major = cursor.get_u8();
        let minor = cursor.get_u8();
        let max_structure_size = cursor.get_u16_le();
        let entry_point_revision = cursor.get_u8();

        let mut formatted_area = [0; 5];
        cursor.copy_to_slice(&mut formatted_area);

        // Skip the intermediate anchor string.
        cursor.advance(ANCHOR_DMI.len());

        Ok(Bits32 {
            checksum,
            length,
            major,
            minor,
            max_structure_size,
            entry_point_revision,
            formatted_area,
            intermediate_checksum: cursor.get_u8(),
            structure_table_length: cursor.get_u16_le(),
            structure_table_address: cursor.get_u32_le(),
            number_structures: cursor.get_u16_le(),
            bcd_revision: cursor.get_u8(),
        })
    }
}

/// Contains the information found in a 64-bit SMBIOS entry point.
#[derive(Debug, PartialEq)]
pub struct Bits64 {
    pub checksum: u8,
    pub length: u8,
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
    pub entry_point_revision: u8,
    pub reserved: u8,
    pub structure_table_max_size: u32,
    pub structure_table_address: u64,
}

impl Bits64 {
    fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < LEN_64 {
            return Err(Error::InvalidEntryPoint {
                reason: "64-bit entry point too short",
            });
        }

        let length = (buf[6] as usize).clamp(LEN_64, buf.len());
        verify_checksum(&buf[..length])?;

        // Skip the anchor string.
        let mut cursor = &buf[ANCHOR_64.len()..LEN_64];

        Ok(Bits64 {
            checksum: cursor.get_u8(),
            length: cursor.get_u8(),
            major: cursor.get_u8(),
            minor: cursor.get_u8(),
            revision: cursor.get_u8(),
            entry_point_revision: cursor.get_u8(),
            reserved: cursor.get_u8(),
            structure_table_max_size: cursor.get_u32_le(),
            structure_table_address: cursor.get_u64_le(),
        })
    }
}

fn verify_checksum(region: &[u8]) -> Result<()> {
    let sum = region.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != 0 {
        debug!("entry point region of {} bytes sums to 0x{:02x}", region.len(), sum);
        return Err(Error::Checksum {
            expected: 0,
            found: sum,
        });
    }

    Ok(())
}

/// Scans a memory image which begins at physical address `base` for an entry
/// point, returning its physical address.
///
/// Paragraphs which carry an unknown anchor or fail to parse, for instance on
/// a checksum mismatch, are skipped.
pub fn find_entry_point(mem: &[u8], base: u64) -> Result<u64> {
    (0..mem.len())
        .step_by(PARAGRAPH_SIZE as usize)
        .find(|&offset| {
            let candidate = &mem[offset..];
            if !candidate.starts_with(ANCHOR_32) && !candidate.starts_with(ANCHOR_64) {
                return false;
            }

            match EntryPoint::parse(candidate) {
                Ok(_) => true,
                Err(err) => {
                    let address = base + offset as u64;
                    debug!("skipping entry point candidate at {:#x}: {}", address, err);
                    false
                }
            }
        })
        .map(|offset| base + offset as u64)
        .ok_or(Error::EntryPointNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const EP_32: [u8; 31] = [
        b'_', b'S', b'M', b'_',
        0xa4,
        0x1f,
        0x2,
        0x8,
        0xd4, 0x1,
        0x0,
        0x0, 0x0, 0x0, 0x0, 0x0,
        b'_', b'D', b'M', b'I', b'_',
        0x95,
        0x5f, 0xf,
        0x0, 0x90, 0xf0, 0x7a,
        0x43, 0x0,
        0x28,
    ];

    #[rustfmt::skip]
    const EP_64: [u8; 24] = [
        b'_', b'S', b'M', b'3', b'_',
        0x86, 0x18, 0x3, 0x0, 0x0, 0x1, 0x0,
        0x53, 0x9, 0x0, 0x0,
        0xb0, 0xb3, 0xe, 0x0, 0x0, 0x0, 0x0, 0x0,
    ];

    #[test]
    fn entry_point_32bit_ok() {
        let entry_point = EntryPoint::parse(&EP_32).expect("expected valid 32-bit entry point");

        let want = EntryPoint::Bits32(Bits32 {
            checksum: 164,
            length: 31,
            major: 2,
            minor: 8,
            max_structure_size: 468,
            entry_point_revision: 0,
            formatted_area: [0, 0, 0, 0, 0],
            intermediate_checksum: 149,
            structure_table_length: 3935,
            structure_table_address: 2_062_585_856,
            number_structures: 67,
            bcd_revision: 40,
        });

        assert_eq!(want, entry_point);
        assert_eq!(Version::new(2, 8, 0), entry_point.version());
        assert_eq!((2_062_585_856, 3935), entry_point.table());
    }

    #[test]
    fn entry_point_32bit_short() {
        EntryPoint::parse(&[b'_', b'S', b'M', b'_', 0xff])
            .expect_err("expected invalid 32-bit entry point");
    }

    #[test]
    fn entry_point_32bit_bad_checksum() {
        let mut buf = EP_32;
        buf[4] = buf[4].wrapping_add(1);

        match EntryPoint::parse(&buf).expect_err("expected checksum error") {
            Error::Checksum { found, .. } => assert_eq!(1, found),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn entry_point_32bit_bad_intermediate_checksum() {
        // Keep the outer sum at zero while breaking the _DMI_ region.
        let mut buf = EP_32;
        buf[4] = buf[4].wrapping_sub(1);
        buf[21] = buf[21].wrapping_add(1);

        EntryPoint::parse(&buf).expect_err("expected intermediate checksum error");
    }

    #[test]
    fn entry_point_64bit_ok() {
        let entry_point = EntryPoint::parse(&EP_64).expect("expected valid 64-bit entry point");

        let want = EntryPoint::Bits64(Bits64 {
            checksum: 134,
            length: 24,
            major: 3,
            minor: 0,
            revision: 0,
            entry_point_revision: 1,
            reserved: 0,
            structure_table_max_size: 2387,
            structure_table_address: 963_504,
        });

        assert_eq!(want, entry_point);
        assert_eq!(Version::new(3, 0, 0), entry_point.version());
        assert_eq!((963_504, 2387), entry_point.table());
    }

    #[test]
    fn entry_point_64bit_short() {
        EntryPoint::parse(&[b'_', b'S', b'M', b'3', b'_', 0xff])
            .expect_err("expected invalid 64-bit entry point");
    }

    #[test]
    fn entry_point_unknown_anchor() {
        EntryPoint::parse(b"_XYZ_0000000000000000000000000000")
            .expect_err("expected unrecognized anchor");
    }

    #[test]
    fn find_entry_point_not_found() {
        #[rustfmt::skip]
        let mem = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            // An anchor prefix alone is not an entry point.
            b'_', b'S', b'M', 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        ];

        find_entry_point(&mem, START_ADDRESS).expect_err("expected entry point not found error");
    }

    #[test]
    fn find_entry_point_ok() {
        // Entry point in second paragraph.
        let mut mem = vec![0xff; PARAGRAPH_SIZE as usize];
        mem.extend_from_slice(&EP_32);

        let address = find_entry_point(&mem, START_ADDRESS).expect("expected valid entry point");

        assert_eq!(START_ADDRESS + PARAGRAPH_SIZE, address);
    }

    #[test]
    fn find_entry_point_skips_invalid_candidates() {
        let mut bad_checksum = EP_32;
        bad_checksum[4] = bad_checksum[4].wrapping_add(1);

        // Unknown anchor at 0x00, a 32-bit entry point with a bad checksum at
        // 0x10, and a valid 64-bit entry point at 0x30.
        let mut mem = b"_SMX".to_vec();
        mem.resize(0x10, 0xff);
        mem.extend_from_slice(&bad_checksum);
        mem.resize(0x30, 0xff);
        mem.extend_from_slice(&EP_64);

        let address = find_entry_point(&mem, START_ADDRESS).expect("expected valid entry point");

        assert_eq!(START_ADDRESS + 0x30, address);
        assert!(matches!(
            EntryPoint::parse(&mem[(address - START_ADDRESS) as usize..]),
            Ok(EntryPoint::Bits64(_))
        ));
    }
}
