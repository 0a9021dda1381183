use serde::Serialize;

use crate::field::Fields;
use crate::table::Structure;

/// Cache Information (type 7).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheInformation {
    pub socket_designation: String,
    /// Cache level, 1 through 8.
    pub level: u8,
    pub enabled: bool,
    pub socketed: bool,
    /// Maximum cache size in kilobytes.
    pub maximum_size: u64,
    /// Installed cache size in kilobytes; 0 when no cache is installed.
    pub installed_size: u64,
}

impl CacheInformation {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        let configuration = f.word(0x05);

        CacheInformation {
            socket_designation: f.string(0x04),
            level: (configuration & 0x07) as u8 + 1,
            enabled: configuration & 0x80 != 0,
            socketed: configuration & 0x08 != 0,
            maximum_size: cache_size(f.word(0x07), f.dword(0x13)),
            installed_size: cache_size(f.word(0x09), f.dword(0x17)),
        }
    }
}

/// Converts a cache size field to kilobytes. The top bit of either width
/// selects 64 KB granularity; a 16-bit value of 0xFFFF defers to the 32-bit
/// field.
fn cache_size(size: u16, size2: u32) -> u64 {
    if size == 0xffff {
        return granular(u64::from(size2 & 0x7fff_ffff), size2 & 0x8000_0000 != 0);
    }

    granular(u64::from(size & 0x7fff), size & 0x8000 != 0)
}

fn granular(magnitude: u64, coarse: bool) -> u64 {
    if coarse {
        magnitude * 64
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_information_ok() {
        #[rustfmt::skip]
        let s = Structure::new(7, 7, vec![
            0x01,
            0x81, 0x01,
            0x00, 0x83,
            0x00, 0x83,
            0x20, 0x00,
            0x20, 0x00,
            0x00,
            0x05,
            0x03,
            0x05,
        ], vec!["L2 Cache".to_string()]);

        let want = CacheInformation {
            socket_designation: "L2 Cache".to_string(),
            level: 2,
            enabled: true,
            socketed: false,
            maximum_size: 0x300 * 64,
            installed_size: 0x300 * 64,
        };

        assert_eq!(want, CacheInformation::from_structure(&s));
    }

    #[test]
    fn cache_size_units() {
        assert_eq!(512, cache_size(0x0200, 0));
        assert_eq!(32 * 1024, cache_size(0x8200, 0));
        assert_eq!(0, cache_size(0x0000, 0));

        // Sizes beyond 2 GB use the 32-bit field.
        assert_eq!(0x0001_0000 * 64, cache_size(0xffff, 0x8001_0000));
        assert_eq!(4096, cache_size(0xffff, 0x0000_1000));
    }
}
