//! Decoding of the System Information UUID field.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::version::Version;

/// Builds a canonical UUID from the 16 bytes firmware stores for it.
///
/// Beginning with SMBIOS 2.6 the time-low, time-mid and time-high fields are
/// stored little-endian, so they are byte-swapped here. Older tables store
/// the whole value in network byte order. Bytes past the first 16 are
/// ignored.
pub fn decode_uuid(raw: &[u8], version: Version) -> Result<Uuid> {
    let bytes: [u8; 16] = raw
        .get(..16)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::ShortUuid { len: raw.len() })?;

    if version.at_least(2, 6) {
        Ok(Uuid::from_bytes_le(bytes))
    } else {
        Ok(Uuid::from_bytes(bytes))
    }
}
