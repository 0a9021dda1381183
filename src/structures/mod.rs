//! Typed records for each supported SMBIOS structure type.
//!
//! Every record is a plain value populated once from a [`Structure`] and
//! holds no reference back to it.
//!
//! [`Structure`]: crate::table::Structure

mod baseboard;
mod bios;
mod cache;
mod enclosure;
mod group;
mod memory_array;
mod memory_device;
mod port;
mod processor;
mod slot;
mod strings;
mod system;

pub use self::baseboard::BaseboardInformation;
pub use self::bios::BiosInformation;
pub use self::cache::CacheInformation;
pub use self::enclosure::SystemEnclosure;
pub use self::group::{GroupAssociations, GroupItem};
pub use self::memory_array::PhysicalMemoryArray;
pub use self::memory_device::MemoryDevice;
pub use self::port::PortConnectorInformation;
pub use self::processor::ProcessorInformation;
pub use self::slot::SystemSlot;
pub use self::strings::{BiosLanguageInformation, OemStrings, SystemConfigurationOptions};
pub use self::system::SystemInformation;
