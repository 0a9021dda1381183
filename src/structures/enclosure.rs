use serde::Serialize;

use crate::enums::{ChassisType, EnclosureState, SecurityStatus};
use crate::field::Fields;
use crate::table::Structure;

const CONTAINED_ELEMENTS: usize = 0x15;

/// System Enclosure or Chassis (type 3).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SystemEnclosure {
    pub manufacturer: String,
    pub chassis_type: ChassisType,
    pub lock_present: bool,
    pub version: String,
    pub serial_number: String,
    pub asset_tag_number: String,
    pub boot_up_state: EnclosureState,
    pub power_supply_state: EnclosureState,
    pub thermal_state: EnclosureState,
    pub security_status: SecurityStatus,
    /// Height in rack units; 0 means unspecified.
    pub height: u8,
    pub number_of_power_cords: u8,
    pub contained_element_count: u8,
    pub contained_element_record_length: u8,
    pub sku_number: String,
}

impl SystemEnclosure {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        let enclosure_type = f.byte(0x05);
        let count = f.byte(0x13);
        let record_length = f.byte(0x14);

        // The SKU number follows the variable-length contained element list.
        let sku_offset = CONTAINED_ELEMENTS + usize::from(count) * usize::from(record_length);

        SystemEnclosure {
            manufacturer: f.string(0x04),
            chassis_type: ChassisType::from(enclosure_type & 0x7f),
            lock_present: enclosure_type & 0x80 != 0,
            version: f.string(0x06),
            serial_number: f.string(0x07),
            asset_tag_number: f.string(0x08),
            boot_up_state: EnclosureState::from(f.byte(0x09)),
            power_supply_state: EnclosureState::from(f.byte(0x0a)),
            thermal_state: EnclosureState::from(f.byte(0x0b)),
            security_status: SecurityStatus::from(f.byte(0x0c)),
            height: f.byte(0x11),
            number_of_power_cords: f.byte(0x12),
            contained_element_count: count,
            contained_element_record_length: record_length,
            sku_number: f.string(sku_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings() -> Vec<String> {
        ["Lenovo", "None", "PF0ABCDE", "No Asset Tag", "LENOVO_MT_20XW"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn system_enclosure_no_elements() {
        #[rustfmt::skip]
        let s = Structure::new(3, 3, vec![
            0x01,
            0x8a,
            0x02, 0x03, 0x04,
            0x03, 0x03, 0x03,
            0x03,
            0x00, 0x00, 0x00, 0x00,
            0x00,
            0x01,
            0x00, 0x00,
            0x05,
        ], strings());

        let want = SystemEnclosure {
            manufacturer: "Lenovo".to_string(),
            chassis_type: ChassisType::Notebook,
            lock_present: true,
            version: "None".to_string(),
            serial_number: "PF0ABCDE".to_string(),
            asset_tag_number: "No Asset Tag".to_string(),
            boot_up_state: EnclosureState::Safe,
            power_supply_state: EnclosureState::Safe,
            thermal_state: EnclosureState::Safe,
            security_status: SecurityStatus::None,
            height: 0,
            number_of_power_cords: 1,
            contained_element_count: 0,
            contained_element_record_length: 0,
            sku_number: "LENOVO_MT_20XW".to_string(),
        };

        assert_eq!(want, SystemEnclosure::from_structure(&s));
    }

    #[test]
    fn system_enclosure_with_elements() {
        #[rustfmt::skip]
        let s = Structure::new(3, 3, vec![
            0x01,
            0x17,
            0x02, 0x03, 0x04,
            0x03, 0x03, 0x03,
            0x02,
            0x00, 0x00, 0x00, 0x00,
            0x02,
            0x02,
            // Two elements, three bytes each.
            0x02, 0x03,
            0x91, 0x01, 0x02,
            0x92, 0x01, 0x01,
            0x05,
        ], strings());

        let got = SystemEnclosure::from_structure(&s);
        assert_eq!(ChassisType::RackMountChassis, got.chassis_type);
        assert!(!got.lock_present);
        assert_eq!(2, got.height);
        assert_eq!(2, got.contained_element_count);
        assert_eq!(3, got.contained_element_record_length);
        assert_eq!("LENOVO_MT_20XW", got.sku_number);
    }

    #[test]
    fn system_enclosure_sku_past_end() {
        #[rustfmt::skip]
        let s = Structure::new(3, 3, vec![
            0x01, 0x03, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00,
            0xff, 0xff,
        ], strings());

        assert_eq!("", SystemEnclosure::from_structure(&s).sku_number);
    }
}
