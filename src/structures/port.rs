use serde::Serialize;

use crate::field::Fields;
use crate::table::Structure;

/// Port Connector Information (type 8).
///
/// Connector and port types are kept as their raw codes. See 7.9.2 and 7.9.3.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PortConnectorInformation {
    pub internal_reference_designator: String,
    pub internal_connector_type: u8,
    pub external_reference_designator: String,
    pub external_connector_type: u8,
    pub port_type: u8,
}

impl PortConnectorInformation {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        PortConnectorInformation {
            internal_reference_designator: f.string(0x04),
            internal_connector_type: f.byte(0x05),
            external_reference_designator: f.string(0x06),
            external_connector_type: f.byte(0x07),
            port_type: f.byte(0x08),
        }
    }
}
