use serde::Serialize;

use crate::enums::{CpuStatus, ProcessorType};
use crate::field::Fields;
use crate::table::Structure;

/// Processor Information (type 4).
///
/// Speeds are reported in MHz exactly as firmware publishes them; 0 means
/// the speed is unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProcessorInformation {
    pub socket_designation: String,
    pub processor_type: ProcessorType,
    pub processor_manufacturer: String,
    /// Raw CPUID-style processor identification. See 7.5.3.
    pub processor_id: u64,
    pub processor_version: String,
    /// Raw voltage byte. With bit 7 set, bits 6:0 hold the voltage times 10;
    /// otherwise bits 2:0 flag supported legacy voltages.
    pub voltage: u8,
    /// External clock frequency in MHz.
    pub external_clock: u16,
    pub max_speed: u16,
    pub current_speed: u16,
    pub socket_populated: bool,
    pub status: CpuStatus,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub core_count: u16,
    pub core_enabled: u16,
    pub thread_count: u16,
}

impl ProcessorInformation {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        let status = f.byte(0x18);

        ProcessorInformation {
            socket_designation: f.string(0x04),
            processor_type: ProcessorType::from(f.byte(0x05)),
            processor_manufacturer: f.string(0x07),
            processor_id: f.qword(0x08),
            processor_version: f.string(0x10),
            voltage: f.byte(0x11),
            external_clock: f.word(0x12),
            max_speed: f.word(0x14),
            current_speed: f.word(0x16),
            socket_populated: status & 0x40 != 0,
            status: CpuStatus::from(status & 0x07),
            serial_number: f.string(0x20),
            asset_tag: f.string(0x21),
            part_number: f.string(0x22),
            core_count: count(&f, 0x23, 0x2a),
            core_enabled: count(&f, 0x24, 0x2c),
            thread_count: count(&f, 0x25, 0x2e),
        }
    }
}

/// Reads a count byte, deferring to its 16-bit successor field when the
/// byte holds 0xFF.
fn count(f: &Fields, offset: usize, wide_offset: usize) -> u16 {
    match f.byte(offset) {
        0xff => match f.word(wide_offset) {
            0 => 0xff,
            n => n,
        },
        n => u16::from(n),
    }
}
