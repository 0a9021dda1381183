use serde::Serialize;

use crate::enums::{MemoryArrayLocation, MemoryArrayUse, MemoryErrorCorrection};
use crate::field::Fields;
use crate::table::Structure;
use crate::units::{ErrorInformationHandle, ExtendedMaximumCapacity, MaximumCapacity};

/// Physical Memory Array (type 16).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PhysicalMemoryArray {
    pub location: MemoryArrayLocation,
    #[serde(rename = "use")]
    pub array_use: MemoryArrayUse,
    pub memory_error_correction: MemoryErrorCorrection,
    pub maximum_capacity: MaximumCapacity,
    pub memory_error_information_handle: ErrorInformationHandle,
    pub number_of_memory_devices: u16,
    pub extended_maximum_capacity: ExtendedMaximumCapacity,
}

impl PhysicalMemoryArray {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        PhysicalMemoryArray {
            location: MemoryArrayLocation::from(f.byte(0x04)),
            array_use: MemoryArrayUse::from(f.byte(0x05)),
            memory_error_correction: MemoryErrorCorrection::from(f.byte(0x06)),
            maximum_capacity: MaximumCapacity(f.dword(0x07)),
            memory_error_information_handle: ErrorInformationHandle(f.word(0x0b)),
            number_of_memory_devices: f.word(0x0d),
            extended_maximum_capacity: ExtendedMaximumCapacity(f.qword(0x0f)),
        }
    }

    /// The maximum capacity in gigabytes, taken from whichever of the two
    /// capacity fields is in effect.
    pub fn maximum_capacity_gigabytes(&self) -> u64 {
        self.maximum_capacity
            .gigabytes()
            .unwrap_or_else(|| self.extended_maximum_capacity.gigabytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_memory_array_ok() {
        #[rustfmt::skip]
        let s = Structure::new(16, 16, vec![
            0x03,
            0x03,
            0x06,
            0x00, 0x00, 0x00, 0x18,
            0xfe, 0xff,
            0x18, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ], vec![]);

        let want = PhysicalMemoryArray {
            location: MemoryArrayLocation::SystemBoard,
            array_use: MemoryArrayUse::SystemMemory,
            memory_error_correction: MemoryErrorCorrection::MultiBitEcc,
            maximum_capacity: MaximumCapacity(0x1800_0000),
            memory_error_information_handle: ErrorInformationHandle(0xfffe),
            number_of_memory_devices: 24,
            extended_maximum_capacity: ExtendedMaximumCapacity(0),
        };

        let got = PhysicalMemoryArray::from_structure(&s);
        assert_eq!(want, got);
        assert_eq!(384, got.maximum_capacity_gigabytes());
        assert_eq!("384 GB", got.maximum_capacity.to_string());
    }

    #[test]
    fn physical_memory_array_extended_capacity() {
        #[rustfmt::skip]
        let s = Structure::new(16, 16, vec![
            0x03,
            0x03,
            0x03,
            0x00, 0x00, 0x00, 0x80,
            0xff, 0xff,
            0x20, 0x00,
            // 12 TiB in bytes.
            0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x00,
        ], vec![]);

        let got = PhysicalMemoryArray::from_structure(&s);
        assert!(got.maximum_capacity.is_extended());
        assert_eq!(12 * 1024, got.maximum_capacity_gigabytes());
        assert_eq!("No Error Detected", got.memory_error_information_handle.to_string());
    }
}
