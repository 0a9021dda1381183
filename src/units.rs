//! Numeric fields whose raw value needs interpretation before use: size
//! units, sentinels which defer to an extended field, and scaled values.

use std::fmt;

use serde::Serialize;

const UNKNOWN: &str = "Unknown";

const KILOBYTE: u64 = 1024;
const MEGABYTE: u64 = 1024 * KILOBYTE;
const GIGABYTE: u64 = 1024 * MEGABYTE;

/// A structure handle, used to cross-reference other structures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Handle(pub u16);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Handle of the error information structure for a memory array or device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorInformationHandle(pub u16);

impl ErrorInformationHandle {
    pub const NOT_PROVIDED: u16 = 0xfffe;
    pub const NO_ERROR: u16 = 0xffff;

    /// The referenced structure, if the field holds a real handle.
    pub fn handle(&self) -> Option<Handle> {
        match self.0 {
            Self::NOT_PROVIDED | Self::NO_ERROR => None,
            h => Some(Handle(h)),
        }
    }
}

impl fmt::Display for ErrorInformationHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Self::NOT_PROVIDED => f.write_str("Not Provided"),
            Self::NO_ERROR => f.write_str("No Error Detected"),
            h => fmt::Display::fmt(&Handle(h), f),
        }
    }
}

/// Memory device Size field.
///
/// Bit 15 selects the unit: clear for megabytes, set for kilobytes. 0x7FFF
/// defers to [`ExtendedSize`] and 0xFFFF means the size is unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MemorySize(pub u16);

impl MemorySize {
    pub const UNKNOWN: u16 = 0xffff;
    pub const SEE_EXTENDED: u16 = 0x7fff;

    const KILOBYTE_UNITS: u16 = 1 << 15;

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    /// Reports whether the size is carried by the Extended Size field.
    pub fn is_extended(&self) -> bool {
        self.0 == Self::SEE_EXTENDED
    }

    /// Reports whether the magnitude is counted in kilobytes.
    pub fn in_kilobytes(&self) -> bool {
        self.0 & Self::KILOBYTE_UNITS != 0
    }

    fn magnitude(&self) -> u64 {
        u64::from(self.0 & !Self::KILOBYTE_UNITS)
    }

    /// The size in kilobytes, or `None` if unknown or held in Extended Size.
    pub fn kilobytes(&self) -> Option<u64> {
        if self.is_unknown() || self.is_extended() {
            return None;
        }

        if self.in_kilobytes() {
            Some(self.magnitude())
        } else {
            Some(self.magnitude() * KILOBYTE)
        }
    }

    /// The size in megabytes, or `None` if unknown or held in Extended Size.
    /// Kilobyte-granular sizes are truncated.
    pub fn megabytes(&self) -> Option<u64> {
        self.kilobytes().map(|kb| kb / KILOBYTE)
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str(UNKNOWN);
        }
        if self.is_extended() {
            return f.write_str("See Extended Size");
        }
        if self.0 == 0 {
            return f.write_str("No Module Installed");
        }

        let unit = if self.in_kilobytes() { "KB" } else { "MB" };
        write!(f, "{} {}", self.magnitude(), unit)
    }
}

/// Memory device Extended Size field, in megabytes. Only meaningful when
/// Size is 0x7FFF.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ExtendedSize(pub u32);

impl ExtendedSize {
    pub fn megabytes(&self) -> u64 {
        // Bit 31 is reserved.
        u64::from(self.0 & 0x7fff_ffff)
    }
}

impl fmt::Display for ExtendedSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} MB", self.megabytes())
    }
}

/// Physical memory array Maximum Capacity field, in kilobytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MaximumCapacity(pub u32);

impl MaximumCapacity {
    pub const SEE_EXTENDED: u32 = 0x8000_0000;

    pub fn is_extended(&self) -> bool {
        self.0 == Self::SEE_EXTENDED
    }

    /// The capacity in gigabytes, or `None` if held in Extended Maximum
    /// Capacity.
    pub fn gigabytes(&self) -> Option<u64> {
        if self.is_extended() {
            return None;
        }

        Some(u64::from(self.0) * KILOBYTE / GIGABYTE)
    }
}

impl fmt::Display for MaximumCapacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.gigabytes() {
            Some(gb) => write!(f, "{} GB", gb),
            None => f.write_str("See Extended Maximum Capacity"),
        }
    }
}

/// Physical memory array Extended Maximum Capacity field, in bytes. Only
/// meaningful when Maximum Capacity is 0x80000000.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ExtendedMaximumCapacity(pub u64);

impl ExtendedMaximumCapacity {
    pub fn gigabytes(&self) -> u64 {
        self.0 / GIGABYTE
    }
}

impl fmt::Display for ExtendedMaximumCapacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("Not Provided");
        }

        write!(f, "{} GB", self.gigabytes())
    }
}

/// A voltage in millivolts. 0 means the voltage is unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Voltage(pub u16);

impl Voltage {
    pub fn volts(&self) -> Option<f64> {
        match self.0 {
            0 => None,
            mv => Some(f64::from(mv) / 1000.0),
        }
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.volts() {
            Some(v) => write!(f, "{:.2} V", v),
            None => f.write_str(UNKNOWN),
        }
    }
}

/// A memory device width in bits. 0xFFFF means the width is unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MemoryWidth(pub u16);

impl fmt::Display for MemoryWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            0xffff => f.write_str(UNKNOWN),
            bits => write!(f, "{} bits", bits),
        }
    }
}

/// A memory speed in megatransfers per second, passed through as published.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MemorySpeed(pub u16);

impl fmt::Display for MemorySpeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} MT/s", self.0)
    }
}

/// Memory device Device Set field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceSet(pub u8);

impl fmt::Display for DeviceSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            0 => f.write_str("None"),
            0xff => f.write_str(UNKNOWN),
            n => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_size_units() {
        assert_eq!("256 MB", MemorySize(0x0100).to_string());
        assert_eq!(Some(256), MemorySize(0x0100).megabytes());

        assert_eq!("256 KB", MemorySize(0x8100).to_string());
        assert_eq!(Some(256), MemorySize(0x8100).kilobytes());
        assert_eq!(Some(0), MemorySize(0x8100).megabytes());
        assert_eq!(Some(2), MemorySize(0x8800).megabytes());
    }

    #[test]
    fn memory_size_sentinels() {
        assert_eq!("Unknown", MemorySize(0xffff).to_string());
        assert_eq!(None, MemorySize(0xffff).megabytes());

        assert_eq!("See Extended Size", MemorySize(0x7fff).to_string());
        assert!(MemorySize(0x7fff).is_extended());
        assert_eq!(None, MemorySize(0x7fff).megabytes());

        assert_eq!("No Module Installed", MemorySize(0).to_string());
        assert_eq!(Some(0), MemorySize(0).megabytes());
    }

    #[test]
    fn extended_size_reserved_bit() {
        assert_eq!(65_536, ExtendedSize(0x8001_0000).megabytes());
        assert_eq!("32768 MB", ExtendedSize(0x8000).to_string());
    }

    #[test]
    fn maximum_capacity() {
        // 64 GiB in kilobytes.
        assert_eq!(Some(64), MaximumCapacity(0x0400_0000).gigabytes());
        assert_eq!("64 GB", MaximumCapacity(0x0400_0000).to_string());

        assert_eq!(None, MaximumCapacity(0x8000_0000).gigabytes());
        assert_eq!(
            "See Extended Maximum Capacity",
            MaximumCapacity(0x8000_0000).to_string()
        );
    }

    #[test]
    fn extended_maximum_capacity_bytes() {
        // 4 TiB in bytes.
        let capacity = ExtendedMaximumCapacity(4 << 40);
        assert_eq!(4096, capacity.gigabytes());
        assert_eq!("4096 GB", capacity.to_string());

        assert_eq!("Not Provided", ExtendedMaximumCapacity(0).to_string());
    }

    #[test]
    fn voltage() {
        assert_eq!("1.20 V", Voltage(1200).to_string());
        assert_eq!("1.35 V", Voltage(1350).to_string());
        assert_eq!("Unknown", Voltage(0).to_string());
        assert_eq!(None, Voltage(0).volts());
    }

    #[test]
    fn device_set() {
        assert_eq!("None", DeviceSet(0x00).to_string());
        assert_eq!("Unknown", DeviceSet(0xff).to_string());
        assert_eq!("3", DeviceSet(0x03).to_string());
    }

    #[test]
    fn widths_and_handles() {
        assert_eq!("72 bits", MemoryWidth(72).to_string());
        assert_eq!("Unknown", MemoryWidth(0xffff).to_string());

        assert_eq!("Not Provided", ErrorInformationHandle(0xfffe).to_string());
        assert_eq!("No Error Detected", ErrorInformationHandle(0xffff).to_string());
        assert_eq!("0x0031", ErrorInformationHandle(0x31).to_string());
        assert_eq!(Some(Handle(0x31)), ErrorInformationHandle(0x31).handle());
        assert_eq!(None, ErrorInformationHandle(0xfffe).handle());
    }
}
