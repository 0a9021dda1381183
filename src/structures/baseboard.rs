use serde::Serialize;

use crate::enums::{BaseboardFeatures, BoardType};
use crate::field::Fields;
use crate::table::Structure;
use crate::units::Handle;

/// Baseboard (or Module) Information (type 2).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BaseboardInformation {
    pub manufacturer: String,
    pub product: String,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub features: BaseboardFeatures,
    /// Describes this board's location within the chassis referenced by
    /// `chassis_handle`.
    pub location_in_chassis: String,
    pub chassis_handle: Handle,
    pub board_type: BoardType,
}

impl BaseboardInformation {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        BaseboardInformation {
            manufacturer: f.string(0x04),
            product: f.string(0x05),
            version: f.string(0x06),
            serial_number: f.string(0x07),
            asset_tag: f.string(0x08),
            features: BaseboardFeatures::from_bits_retain(f.byte(0x09)),
            location_in_chassis: f.string(0x0a),
            chassis_handle: Handle(f.word(0x0b)),
            board_type: BoardType::from(f.byte(0x0d)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseboard_information_ok() {
        #[rustfmt::skip]
        let s = Structure::new(2, 2, vec![
            0x01, 0x02, 0x03, 0x04, 0x05,
            0x09,
            0x06,
            0x03, 0x00,
            0x0a,
            0x00,
        ], vec![
            "Supermicro".to_string(),
            "X10DRi".to_string(),
            "1.02".to_string(),
            "NM15AS000000".to_string(),
            "To be filled by O.E.M.".to_string(),
            "Default string".to_string(),
        ]);

        let want = BaseboardInformation {
            manufacturer: "Supermicro".to_string(),
            product: "X10DRi".to_string(),
            version: "1.02".to_string(),
            serial_number: "NM15AS000000".to_string(),
            asset_tag: "".to_string(),
            features: BaseboardFeatures::HOSTING_BOARD | BaseboardFeatures::REPLACEABLE,
            location_in_chassis: "Default string".to_string(),
            chassis_handle: Handle(3),
            board_type: BoardType::Motherboard,
        };

        assert_eq!(want, BaseboardInformation::from_structure(&s));
    }
}
