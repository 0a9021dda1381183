//! Routes raw structures to their typed decoders and gathers the results
//! into an [`Inventory`].

use log::{debug, trace, warn};
use serde::Serialize;

use crate::structures::*;
use crate::table::Structure;
use crate::version::Version;

/// The hardware inventory described by one SMBIOS table.
///
/// Types which appear at most once are held directly and left at their
/// default when absent. Repeating types are held in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub bios_information: BiosInformation,
    pub system_information: SystemInformation,
    pub baseboard_information: BaseboardInformation,
    pub system_enclosure: SystemEnclosure,
    pub processor_information: Vec<ProcessorInformation>,
    pub cache_information: Vec<CacheInformation>,
    pub port_connector_information: Vec<PortConnectorInformation>,
    pub system_slots: Vec<SystemSlot>,
    pub oem_strings: OemStrings,
    pub system_configuration_options: SystemConfigurationOptions,
    pub bios_language_information: BiosLanguageInformation,
    pub group_associations: GroupAssociations,
    pub physical_memory_array: PhysicalMemoryArray,
    pub memory_devices: Vec<MemoryDevice>,
}

impl Inventory {
    /// Total size of all installed memory devices in megabytes. Devices of
    /// unknown size do not contribute.
    pub fn total_memory_megabytes(&self) -> u64 {
        self.memory_devices
            .iter()
            .filter_map(MemoryDevice::size_megabytes)
            .sum()
    }

    fn insert(&mut self, record: Record, handle: u16) {
        match record {
            Record::Bios(r) => set(&mut self.bios_information, r, "BIOS information", handle),
            Record::System(r) => set(&mut self.system_information, r, "system information", handle),
            Record::Baseboard(r) => {
                set(&mut self.baseboard_information, r, "baseboard information", handle)
            }
            Record::Enclosure(r) => set(&mut self.system_enclosure, r, "system enclosure", handle),
            Record::Processor(r) => self.processor_information.push(r),
            Record::Cache(r) => self.cache_information.push(r),
            Record::PortConnector(r) => self.port_connector_information.push(r),
            Record::Slot(r) => self.system_slots.push(r),
            Record::OemStrings(r) => set(&mut self.oem_strings, r, "OEM strings", handle),
            Record::ConfigurationOptions(r) => set(
                &mut self.system_configuration_options,
                r,
                "system configuration options",
                handle,
            ),
            Record::BiosLanguage(r) => set(
                &mut self.bios_language_information,
                r,
                "BIOS language information",
                handle,
            ),
            Record::GroupAssociations(r) => {
                set(&mut self.group_associations, r, "group associations", handle)
            }
            Record::MemoryArray(r) => {
                set(&mut self.physical_memory_array, r, "physical memory array", handle)
            }
            Record::MemoryDevice(r) => self.memory_devices.push(r),
        }
    }
}

/// Overwrites a singleton field, noting when firmware published it twice.
fn set<T: Default + PartialEq>(slot: &mut T, value: T, name: &str, handle: u16) {
    if *slot != T::default() {
        warn!(
            "repeated {} structure 0x{:04x} replaces an earlier one",
            name, handle
        );
    }

    *slot = value;
}

/// A decoded structure of one of the supported types.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Bios(BiosInformation),
    System(SystemInformation),
    Baseboard(BaseboardInformation),
    Enclosure(SystemEnclosure),
    Processor(ProcessorInformation),
    Cache(CacheInformation),
    PortConnector(PortConnectorInformation),
    Slot(SystemSlot),
    OemStrings(OemStrings),
    ConfigurationOptions(SystemConfigurationOptions),
    BiosLanguage(BiosLanguageInformation),
    GroupAssociations(GroupAssociations),
    MemoryArray(PhysicalMemoryArray),
    MemoryDevice(MemoryDevice),
}

impl Record {
    /// Decodes `s` according to its type code. Returns `None` for obsolete,
    /// unsupported, and unknown types.
    pub fn from_structure(s: &Structure, version: Version) -> Option<Self> {
        let record = match s.header.header_type {
            0 => Record::Bios(BiosInformation::from_structure(s)),
            1 => Record::System(SystemInformation::from_structure(s, version)),
            2 => Record::Baseboard(BaseboardInformation::from_structure(s)),
            3 => Record::Enclosure(SystemEnclosure::from_structure(s)),
            4 => Record::Processor(ProcessorInformation::from_structure(s)),
            7 => Record::Cache(CacheInformation::from_structure(s)),
            8 => Record::PortConnector(PortConnectorInformation::from_structure(s)),
            9 => Record::Slot(SystemSlot::from_structure(s)),
            11 => Record::OemStrings(OemStrings::from_structure(s)),
            12 => Record::ConfigurationOptions(SystemConfigurationOptions::from_structure(s)),
            13 => Record::BiosLanguage(BiosLanguageInformation::from_structure(s)),
            14 => Record::GroupAssociations(GroupAssociations::from_structure(s)),
            16 => Record::MemoryArray(PhysicalMemoryArray::from_structure(s)),
            17 => Record::MemoryDevice(MemoryDevice::from_structure(s)),
            // Obsolete memory controller, memory module and on board device
            // types, the event log, end-of-table, and anything unknown.
            _ => return None,
        };

        Some(record)
    }
}

/// Decodes every structure in `structures` into an [`Inventory`].
///
/// `version` is the SMBIOS version reported by the entry point; it only
/// affects the byte order of the system UUID. Decoding never fails: fields
/// a structure is too short to carry are left at their defaults.
pub fn decode(structures: &[Structure], version: Version) -> Inventory {
    let mut inventory = Inventory::default();

    for s in structures {
        let (header_type, handle) = (s.header.header_type, s.header.handle);

        match Record::from_structure(s, version) {
            Some(record) => {
                trace!("decoded type {} structure 0x{:04x}", header_type, handle);
                inventory.insert(record, handle);
            }
            None => debug!("skipping type {} structure 0x{:04x}", header_type, handle),
        }
    }

    inventory
}
