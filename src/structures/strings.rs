//! Structures which consist only of a string table.

use serde::Serialize;

use crate::field::Fields;
use crate::table::Structure;

/// OEM Strings (type 11).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OemStrings {
    pub strings: Vec<String>,
}

impl OemStrings {
    pub fn from_structure(s: &Structure) -> Self {
        OemStrings {
            strings: Fields::new(s).strings(),
        }
    }
}

/// System Configuration Options (type 12), such as jumper settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SystemConfigurationOptions {
    pub options: Vec<String>,
}

impl SystemConfigurationOptions {
    pub fn from_structure(s: &Structure) -> Self {
        SystemConfigurationOptions {
            options: Fields::new(s).strings(),
        }
    }
}

/// BIOS Language Information (type 13).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BiosLanguageInformation {
    pub installable_languages: Vec<String>,
    /// Languages are listed as `en|US` rather than `en|US|iso8859-1`.
    pub abbreviated_format: bool,
    pub current_language: String,
}

impl BiosLanguageInformation {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        BiosLanguageInformation {
            installable_languages: f.strings(),
            abbreviated_format: f.byte(0x05) & 0x01 != 0,
            current_language: f.string(0x15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(strings: &[&str]) -> Vec<String> {
        strings.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn oem_strings_ok() {
        let s = Structure::new(
            11,
            11,
            vec![0x03],
            strings(&["Dell System", " 1[0724] ", "To Be Filled By O.E.M."]),
        );

        assert_eq!(
            strings(&["Dell System", "1[0724]", ""]),
            OemStrings::from_structure(&s).strings
        );
    }

    #[test]
    fn system_configuration_options_ok() {
        let s = Structure::new(12, 12, vec![0x01], strings(&["NVR:CLEAR"]));

        assert_eq!(
            strings(&["NVR:CLEAR"]),
            SystemConfigurationOptions::from_structure(&s).options
        );
    }

    #[test]
    fn bios_language_information_ok() {
        #[rustfmt::skip]
        let mut formatted = vec![
            0x02,
            0x01,
        ];
        // 15 reserved bytes precede the current language.
        formatted.extend_from_slice(&[0; 15]);
        formatted.push(0x02);

        let s = Structure::new(13, 13, formatted, strings(&["enUS", "frFR"]));

        let want = BiosLanguageInformation {
            installable_languages: strings(&["enUS", "frFR"]),
            abbreviated_format: true,
            current_language: "frFR".to_string(),
        };

        assert_eq!(want, BiosLanguageInformation::from_structure(&s));
    }
}
