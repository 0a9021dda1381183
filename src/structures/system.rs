use log::warn;
use serde::Serialize;
use uuid::Uuid;

use crate::enums::WakeUpType;
use crate::field::Fields;
use crate::system_uuid::decode_uuid;
use crate::table::Structure;
use crate::version::Version;

const UUID_OFFSET: usize = 0x08;
const UUID_LEN: usize = 16;

/// System Information (type 1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SystemInformation {
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
    pub serial_number: String,
    /// Left unset when the structure is too short to carry a UUID.
    pub uuid: Option<Uuid>,
    pub wake_up_type: WakeUpType,
    pub sku_number: String,
    pub family: String,
}

impl SystemInformation {
    /// Decodes the structure. The SMBIOS version determines the byte order
    /// of the UUID.
    pub fn from_structure(s: &Structure, version: Version) -> Self {
        let f = Fields::new(s);

        let raw = f.bytes(UUID_OFFSET, UUID_LEN).unwrap_or_default();
        let uuid = match decode_uuid(raw, version) {
            Ok(uuid) => Some(uuid),
            Err(err) => {
                warn!("system information 0x{:04x}: {}", s.header.handle, err);
                None
            }
        };

        SystemInformation {
            manufacturer: f.string(0x04),
            product_name: f.string(0x05),
            version: f.string(0x06),
            serial_number: f.string(0x07),
            uuid,
            wake_up_type: WakeUpType::from(f.byte(0x18)),
            sku_number: f.string(0x19),
            family: f.string(0x1a),
        }
    }
}
