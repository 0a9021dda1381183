use serde::Serialize;

use crate::enums::{FormFactor, MemoryType, TypeDetail};
use crate::field::Fields;
use crate::table::Structure;
use crate::units::{
    DeviceSet, ErrorInformationHandle, ExtendedSize, Handle, MemorySize, MemorySpeed, MemoryWidth,
    Voltage,
};

/// Memory Device (type 17).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryDevice {
    /// The Physical Memory Array to which this device belongs.
    pub physical_memory_array_handle: Handle,
    pub memory_error_information_handle: ErrorInformationHandle,
    /// Total width in bits, including any error-correction bits.
    pub total_width: MemoryWidth,
    pub data_width: MemoryWidth,
    pub size: MemorySize,
    pub form_factor: FormFactor,
    pub device_set: DeviceSet,
    /// The physically-labeled socket or board position, e.g. "DIMM_A1".
    pub device_locator: String,
    pub bank_locator: String,
    pub memory_type: MemoryType,
    pub type_detail: TypeDetail,
    /// Maximum capable speed.
    pub speed: MemorySpeed,
    pub manufacturer: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    /// Rank count; 0 when unknown.
    pub rank: u8,
    pub extended_size: ExtendedSize,
    pub configured_memory_speed: MemorySpeed,
    pub minimum_voltage: Voltage,
    pub maximum_voltage: Voltage,
    pub configured_voltage: Voltage,
    /// Maximum speed in MT/s when `speed` is 0xFFFF.
    pub extended_speed: u32,
    /// Configured speed in MT/s when `configured_memory_speed` is 0xFFFF.
    pub extended_configured_memory_speed: u32,
}

impl MemoryDevice {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        MemoryDevice {
            physical_memory_array_handle: Handle(f.word(0x04)),
            memory_error_information_handle: ErrorInformationHandle(f.word(0x06)),
            total_width: MemoryWidth(f.word(0x08)),
            data_width: MemoryWidth(f.word(0x0a)),
            size: MemorySize(f.word(0x0c)),
            form_factor: FormFactor::from(f.byte(0x0e)),
            device_set: DeviceSet(f.byte(0x0f)),
            device_locator: f.string(0x10),
            bank_locator: f.string(0x11),
            memory_type: MemoryType::from(f.byte(0x12)),
            type_detail: TypeDetail::from_bits_retain(f.word(0x13)),
            speed: MemorySpeed(f.word(0x15)),
            manufacturer: f.string(0x17),
            serial_number: f.string(0x18),
            asset_tag: f.string(0x19),
            part_number: f.string(0x1a),
            rank: f.byte(0x1b) & 0x0f,
            extended_size: ExtendedSize(f.dword(0x1c)),
            configured_memory_speed: MemorySpeed(f.word(0x20)),
            minimum_voltage: Voltage(f.word(0x22)),
            maximum_voltage: Voltage(f.word(0x24)),
            configured_voltage: Voltage(f.word(0x26)),
            extended_speed: f.dword(0x54),
            extended_configured_memory_speed: f.dword(0x58),
        }
    }

    /// The device size in megabytes, resolving the Extended Size field when
    /// Size defers to it. `None` when the size is unknown.
    pub fn size_megabytes(&self) -> Option<u64> {
        if self.size.is_extended() {
            return Some(self.extended_size.megabytes());
        }

        self.size.megabytes()
    }
}
