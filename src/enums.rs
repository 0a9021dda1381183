//! Enumerated and bit-packed fields defined by the SMBIOS specification.

use std::fmt;

use bitflags::bitflags;
use serde::{Serialize, Serializer};

const UNKNOWN: &str = "Unknown";

/// Declares an enumeration decoded from a single byte. Codes outside the
/// listed domain decode to `Unrecognized` and are labelled "Unknown".
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($code:pat => $variant:ident: $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A code this library does not recognize.
            Unrecognized(u8),
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Unrecognized(other),
                }
            }
        }

        impl $name {
            /// The label the SMBIOS specification gives this value.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unrecognized(_) => UNKNOWN,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::from(0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

code_enum! {
    /// The event that caused the system to power up. See 7.2.2.
    WakeUpType {
        0x00 => Reserved: "Reserved",
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => ApmTimer: "APM Timer",
        0x04 => ModemRing: "Modem Ring",
        0x05 => LanRemote: "LAN Remote",
        0x06 => PowerSwitch: "Power Switch",
        0x07 => PciPme: "PCI PME#",
        0x08 => AcPowerRestored: "AC Power Restored",
    }
}

code_enum! {
    /// The type of a baseboard. See 7.3.2.
    BoardType {
        0x01 => Unknown: "Unknown",
        0x02 => Other: "Other",
        0x03 => ServerBlade: "Server Blade",
        0x04 => ConnectivitySwitch: "Connectivity Switch",
        0x05 => SystemManagementModule: "System Management Module",
        0x06 => ProcessorModule: "Processor Module",
        0x07 => IoModule: "I/O Module",
        0x08 => MemoryModule: "Memory Module",
        0x09 => DaughterBoard: "Daughter board",
        0x0a => Motherboard: "Motherboard (includes processor, memory, and I/O)",
        0x0b => ProcessorMemoryModule: "Processor/Memory Module",
        0x0c => ProcessorIoModule: "Processor/IO Module",
        0x0d => InterconnectBoard: "Interconnect board",
    }
}

code_enum! {
    /// The type of a system enclosure, from bits 6:0 of its type byte.
    /// See 7.4.1.
    ChassisType {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => Desktop: "Desktop",
        0x04 => LowProfileDesktop: "Low Profile Desktop",
        0x05 => PizzaBox: "Pizza Box",
        0x06 => MiniTower: "Mini Tower",
        0x07 => Tower: "Tower",
        0x08 => Portable: "Portable",
        0x09 => Laptop: "Laptop",
        0x0a => Notebook: "Notebook",
        0x0b => HandHeld: "Hand Held",
        0x0c => DockingStation: "Docking Station",
        0x0d => AllInOne: "All in One",
        0x0e => SubNotebook: "Sub Notebook",
        0x0f => SpaceSaving: "Space-saving",
        0x10 => LunchBox: "Lunch Box",
        0x11 => MainServerChassis: "Main Server Chassis",
        0x12 => ExpansionChassis: "Expansion Chassis",
        0x13 => SubChassis: "SubChassis",
        0x14 => BusExpansionChassis: "Bus Expansion Chassis",
        0x15 => PeripheralChassis: "Peripheral Chassis",
        0x16 => RaidChassis: "RAID Chassis",
        0x17 => RackMountChassis: "Rack Mount Chassis",
        0x18 => SealedCasePc: "Sealed-case PC",
        0x19 => MultiSystemChassis: "Multi-system chassis",
        0x1a => CompactPci: "Compact PCI",
        0x1b => AdvancedTca: "Advanced TCA",
        0x1c => Blade: "Blade",
        0x1d => BladeEnclosure: "Blade Enclosure",
        0x1e => Tablet: "Tablet",
        0x1f => Convertible: "Convertible",
        0x20 => Detachable: "Detachable",
        0x21 => IotGateway: "IoT Gateway",
        0x22 => EmbeddedPc: "Embedded PC",
        0x23 => MiniPc: "Mini PC",
        0x24 => StickPc: "Stick PC",
    }
}

code_enum! {
    /// Boot-up, power supply and thermal state of an enclosure. See 7.4.2.
    EnclosureState {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => Safe: "Safe",
        0x04 => Warning: "Warning",
        0x05 => Critical: "Critical",
        0x06 => NonRecoverable: "Non-recoverable",
    }
}

code_enum! {
    /// Physical security status of an enclosure. See 7.4.3.
    SecurityStatus {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => None: "None",
        0x04 => LockedOut: "External interface locked out",
        0x05 => Enabled: "External interface enabled",
    }
}

code_enum! {
    /// See 7.5.1.
    ProcessorType {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => CentralProcessor: "Central Processor",
        0x04 => MathProcessor: "Math Processor",
        0x05 => DspProcessor: "DSP Processor",
        0x06 => VideoProcessor: "Video Processor",
    }
}

code_enum! {
    /// Bits 2:0 of the processor status byte.
    CpuStatus {
        0x00 => Unknown: "Unknown",
        0x01 => Enabled: "Enabled",
        0x02 => DisabledByUser: "Disabled By User",
        0x03 => DisabledByBios: "Disabled By BIOS",
        0x04 => Idle: "Idle",
        0x07 => Other: "Other",
    }
}

code_enum! {
    /// Current usage of a system slot. See 7.10.3.
    SlotUsage {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => Available: "Available",
        0x04 => InUse: "In use",
        0x05 => Unavailable: "Unavailable",
    }
}

code_enum! {
    /// Physical location of a memory array. See 7.17.1.
    MemoryArrayLocation {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => SystemBoard: "System board or motherboard",
        0x04 => IsaAddon: "ISA add-on card",
        0x05 => EisaAddon: "EISA add-on card",
        0x06 => PciAddon: "PCI add-on card",
        0x07 => McaAddon: "MCA add-on card",
        0x08 => PcmciaAddon: "PCMCIA add-on card",
        0x09 => ProprietaryAddon: "Proprietary add-on card",
        0x0a => NuBus: "NuBus",
        0xa0 => Pc98C20Addon: "PC-98/C20 add-on card",
        0xa1 => Pc98C24Addon: "PC-98/C24 add-on card",
        0xa2 => Pc98EAddon: "PC-98/E add-on card",
        0xa3 => Pc98LocalBusAddon: "PC-98/Local bus add-on card",
        0xa4 => CxlAddon: "CXL add-on card",
    }
}

code_enum! {
    /// Function for which a memory array is used. See 7.17.2.
    MemoryArrayUse {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => SystemMemory: "System memory",
        0x04 => VideoMemory: "Video memory",
        0x05 => FlashMemory: "Flash memory",
        0x06 => NonVolatileRam: "Non-volatile RAM",
        0x07 => CacheMemory: "Cache memory",
    }
}

code_enum! {
    /// Error correction scheme of a memory array. See 7.17.3.
    MemoryErrorCorrection {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => None: "None",
        0x04 => Parity: "Parity",
        0x05 => SingleBitEcc: "Single-bit ECC",
        0x06 => MultiBitEcc: "Multi-bit ECC",
        0x07 => Crc: "CRC",
    }
}

code_enum! {
    /// Implementation form factor of a memory device. See 7.18.1.
    FormFactor {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => Simm: "SIMM",
        0x04 => Sip: "SIP",
        0x05 => Chip: "Chip",
        0x06 => Dip: "DIP",
        0x07 => Zip: "ZIP",
        0x08 => ProprietaryCard: "Proprietary Card",
        0x09 => Dimm: "DIMM",
        0x0a => Tsop: "TSOP",
        0x0b => RowOfChips: "Row of chips",
        0x0c => Rimm: "RIMM",
        0x0d => Sodimm: "SODIMM",
        0x0e => Srimm: "SRIMM",
        0x0f => FbDimm: "FB-DIMM",
        0x10 => Die: "Die",
    }
}

code_enum! {
    /// Type of memory used in a memory device. See 7.18.2.
    MemoryType {
        0x01 => Other: "Other",
        0x02 => Unknown: "Unknown",
        0x03 => Dram: "DRAM",
        0x04 => Edram: "EDRAM",
        0x05 => Vram: "VRAM",
        0x06 => Sram: "SRAM",
        0x07 => Ram: "RAM",
        0x08 => Rom: "ROM",
        0x09 => Flash: "FLASH",
        0x0a => Eeprom: "EEPROM",
        0x0b => Feprom: "FEPROM",
        0x0c => Eprom: "EPROM",
        0x0d => Cdram: "CDRAM",
        0x0e => ThreeDram: "3DRAM",
        0x0f => Sdram: "SDRAM",
        0x10 => Sgram: "SGRAM",
        0x11 => Rdram: "RDRAM",
        0x12 => Ddr: "DDR",
        0x13 => Ddr2: "DDR2",
        0x14 => Ddr2FbDimm: "DDR2 FB-DIMM",
        0x15..=0x17 => Reserved: "Reserved",
        0x18 => Ddr3: "DDR3",
        0x19 => Fbd2: "FBD2",
        0x1a => Ddr4: "DDR4",
        0x1b => Lpddr: "LPDDR",
        0x1c => Lpddr2: "LPDDR2",
        0x1d => Lpddr3: "LPDDR3",
        0x1e => Lpddr4: "LPDDR4",
        0x1f => LogicalNonVolatileDevice: "Logical non-volatile device",
        0x20 => Hbm: "HBM (High Bandwidth Memory)",
        0x21 => Hbm2: "HBM2 (High Bandwidth Memory Generation 2)",
        0x22 => Ddr5: "DDR5",
        0x23 => Lpddr5: "LPDDR5",
    }
}

bitflags! {
    /// Additional detail on a memory device's type. See 7.18.3.
    ///
    /// Serializes as the list of attribute labels, highest bit first.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeDetail: u16 {
        const LRDIMM = 1 << 15;
        const UNBUFFERED = 1 << 14;
        const REGISTERED = 1 << 13;
        const NON_VOLATILE = 1 << 12;
        const CACHE_DRAM = 1 << 11;
        const WINDOW_DRAM = 1 << 10;
        const EDO = 1 << 9;
        const CMOS = 1 << 8;
        const SYNCHRONOUS = 1 << 7;
        const RAMBUS = 1 << 6;
        const PSEUDO_STATIC = 1 << 5;
        const STATIC_COLUMN = 1 << 4;
        const FAST_PAGED = 1 << 3;
        const UNKNOWN = 1 << 2;
        const OTHER = 1 << 1;
        const RESERVED = 1 << 0;
    }
}

// Ordered from bit 15 down to bit 0.
static TYPE_DETAIL_LABELS: [(TypeDetail, &str); 16] = [
    (TypeDetail::LRDIMM, "LRDIMM"),
    (TypeDetail::UNBUFFERED, "Unbuffered (Unregistered)"),
    (TypeDetail::REGISTERED, "Registered (Buffered)"),
    (TypeDetail::NON_VOLATILE, "Non-volatile"),
    (TypeDetail::CACHE_DRAM, "Cache DRAM"),
    (TypeDetail::WINDOW_DRAM, "Window DRAM"),
    (TypeDetail::EDO, "EDO"),
    (TypeDetail::CMOS, "CMOS"),
    (TypeDetail::SYNCHRONOUS, "Synchronous"),
    (TypeDetail::RAMBUS, "RAMBUS"),
    (TypeDetail::PSEUDO_STATIC, "Pseudo-static"),
    (TypeDetail::STATIC_COLUMN, "Static column"),
    (TypeDetail::FAST_PAGED, "Fast-paged"),
    (TypeDetail::UNKNOWN, "Unknown"),
    (TypeDetail::OTHER, "Other"),
    (TypeDetail::RESERVED, "Reserved"),
];

impl TypeDetail {
    /// Labels of the attributes set in this value, highest bit first.
    pub fn attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        TYPE_DETAIL_LABELS
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label)
    }
}

impl Serialize for TypeDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.attributes())
    }
}

impl fmt::Display for TypeDetail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let attributes: Vec<_> = self.attributes().collect();
        f.write_str(&attributes.join(" "))
    }
}

bitflags! {
    /// Baseboard feature flags. See 7.3.1.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct BaseboardFeatures: u8 {
        const HOSTING_BOARD = 1 << 0;
        const REQUIRES_DAUGHTER_BOARD = 1 << 1;
        const REMOVABLE = 1 << 2;
        const REPLACEABLE = 1 << 3;
        const HOT_SWAPPABLE = 1 << 4;
    }
}
