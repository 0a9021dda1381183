use serde::Serialize;

use crate::enums::SlotUsage;
use crate::field::Fields;
use crate::table::Structure;

/// System Slots (type 9).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SystemSlot {
    pub slot_designation: String,
    /// Raw slot type code. See 7.10.1.
    pub slot_type: u8,
    /// Raw data bus width code. See 7.10.2.
    pub data_bus_width: u8,
    pub current_usage: SlotUsage,
    /// Raw slot length code. See 7.10.4.
    pub slot_length: u8,
    pub slot_id: u16,
}

impl SystemSlot {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        SystemSlot {
            slot_designation: f.string(0x04),
            slot_type: f.byte(0x05),
            data_bus_width: f.byte(0x06),
            current_usage: SlotUsage::from(f.byte(0x07)),
            slot_length: f.byte(0x08),
            slot_id: f.word(0x09),
        }
    }
}
