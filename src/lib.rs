//! Provides detection and access to System Management BIOS (SMBIOS) and
//! Desktop Management Interface (DMI) data and structures, and decodes those
//! structures into a typed hardware [`Inventory`].
//!
//! ```no_run
//! # fn main() -> smbios::Result<()> {
//! let (entry_point, inventory) = smbios::inventory()?;
//!
//! println!("SMBIOS {}", entry_point.version());
//! for dimm in &inventory.memory_devices {
//!     println!("{}: {}", dimm.device_locator, dimm.size);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::prelude::*;
use std::io::SeekFrom;
use std::path::Path;

use log::debug;

mod entry;
mod enums;
mod error;
mod field;
mod inventory;
pub mod structures;
mod system_uuid;
mod table;
mod units;
mod version;

pub use crate::entry::{find_entry_point, Bits32, Bits64, EntryPoint};
pub use crate::enums::*;
pub use crate::error::{Error, Result};
pub use crate::field::{string_at, Fields};
pub use crate::inventory::{decode, Inventory, Record};
pub use crate::system_uuid::decode_uuid;
pub use crate::table::{Decoder, Header, Structure, END_OF_TABLE};
pub use crate::units::*;
pub use crate::version::{ParseVersionError, Version};

const DEV_MEM: &str = "/dev/mem";
const LINUX_SYSFS_DMI: &str = "/sys/firmware/dmi/tables/DMI";
const LINUX_SYSFS_ENTRY_POINT: &str = "/sys/firmware/dmi/tables/smbios_entry_point";

/// Detects the SMBIOS entry point and reads every structure in the SMBIOS
/// table.
///
/// The Linux sysfs tables are used when present; otherwise the legacy BIOS
/// region of `/dev/mem` is scanned for an entry point.
pub fn stream() -> Result<(EntryPoint, Vec<Structure>)> {
    // TODO: read the tables via sysctl on FreeBSD and GetSystemFirmwareTable
    // on Windows.
    if Path::new(LINUX_SYSFS_ENTRY_POINT).exists() {
        return stream_from(LINUX_SYSFS_ENTRY_POINT, LINUX_SYSFS_DMI);
    }

    if !Path::new(DEV_MEM).exists() {
        return Err(Error::EntryPointNotFound);
    }

    debug!("{} not found, falling back to {}", LINUX_SYSFS_ENTRY_POINT, DEV_MEM);
    dev_mem_stream()
}

/// Reads an entry point and structure table from the files at the given
/// paths, in the layout Linux exposes them under `/sys/firmware/dmi/tables`.
pub fn stream_from<P, Q>(entry_point: P, table: Q) -> Result<(EntryPoint, Vec<Structure>)>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let entry_point = EntryPoint::parse(&fs::read(entry_point)?)?;
    let structures = Decoder::from_reader(fs::File::open(table)?)?.decode()?;

    Ok((entry_point, structures))
}

/// Detects and reads the SMBIOS table, and decodes it into an [`Inventory`]
/// using the version reported by the entry point.
pub fn inventory() -> Result<(EntryPoint, Inventory)> {
    let (entry_point, structures) = stream()?;
    let inventory = decode(&structures, entry_point.version());

    Ok((entry_point, inventory))
}

fn dev_mem_stream() -> Result<(EntryPoint, Vec<Structure>)> {
    let mut mem = fs::File::open(DEV_MEM)?;

    // Search for the entry point in the region the SMBIOS specification
    // reserves for it.
    let mut region = vec![0; (entry::END_ADDRESS - entry::START_ADDRESS + 1) as usize];
    mem.seek(SeekFrom::Start(entry::START_ADDRESS))?;
    mem.read_exact(&mut region)?;

    let address = find_entry_point(&region, entry::START_ADDRESS)?;
    let entry_point = EntryPoint::parse(&region[(address - entry::START_ADDRESS) as usize..])?;
    debug!("found SMBIOS {} entry point at {:#010x}", entry_point.version(), address);

    let (table_address, table_size) = entry_point.table();
    mem.seek(SeekFrom::Start(table_address))?;

    let structures = Decoder::from_reader(mem.take(table_size as u64))?.decode()?;

    Ok((entry_point, structures))
}
