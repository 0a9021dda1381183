use serde::Serialize;

use crate::field::Fields;
use crate::table::Structure;

/// BIOS Information (type 0).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BiosInformation {
    pub vendor: String,
    pub version: String,
    /// Segment location of the BIOS runtime image, 0 on UEFI systems.
    pub starting_address_segment: u16,
    pub release_date: String,
    /// Size of the physical device containing the BIOS, in bytes.
    pub rom_size: u64,
    /// Raw BIOS characteristics bit field. See 7.1.1.
    pub characteristics: u64,
    /// System BIOS major and minor release. `None` when unsupported or when
    /// the structure predates SMBIOS 2.4.
    pub bios_release: Option<(u8, u8)>,
    /// Embedded controller firmware major and minor release, if supported.
    pub firmware_release: Option<(u8, u8)>,
}

impl BiosInformation {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        BiosInformation {
            vendor: f.string(0x04),
            version: f.string(0x05),
            starting_address_segment: f.word(0x06),
            release_date: f.string(0x08),
            rom_size: rom_size(f.byte(0x09), f.word(0x18)),
            characteristics: f.qword(0x0a),
            bios_release: release(&f, 0x14),
            firmware_release: release(&f, 0x16),
        }
    }
}

fn rom_size(size: u8, extended: u16) -> u64 {
    if size != 0xff {
        return (u64::from(size) + 1) * 64 * 1024;
    }

    // Bits 15:14 select the unit, bits 13:0 hold the magnitude.
    let magnitude = u64::from(extended & 0x3fff);
    match extended >> 14 {
        0b00 => magnitude << 20,
        0b01 => magnitude << 30,
        _ => 0,
    }
}

/// Reads a major/minor release pair. Both bytes must be present, and
/// 0xFF/0xFF means the release is not supported.
fn release(f: &Fields, offset: usize) -> Option<(u8, u8)> {
    match *f.bytes(offset, 2)? {
        [0xff, 0xff] => None,
        [major, minor] => Some((major, minor)),
        _ => None,
    }
}
