use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The SMBIOS revision published by the entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Version {
            major,
            minor,
            revision,
        }
    }

    /// Reports whether this version is `major.minor` or later.
    pub fn at_least(&self, major: u8, minor: u8) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// Returned when a version string is not of the form `MAJOR.MINOR[.REVISION]`.
#[derive(Debug, PartialEq, Error)]
#[error("invalid SMBIOS version {0:?}")]
pub struct ParseVersionError(String);

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());

        let parts = s
            .split('.')
            .map(|p| p.parse::<u8>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts[..] {
            [major, minor] => Ok(Version::new(major, minor, 0)),
            [major, minor, revision] => Ok(Version::new(major, minor, revision)),
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_at_least() {
        assert!(Version::new(3, 0, 0).at_least(2, 6));
        assert!(Version::new(2, 6, 0).at_least(2, 6));
        assert!(!Version::new(2, 5, 9).at_least(2, 6));
        assert!(!Version::new(1, 9, 0).at_least(2, 0));
    }

    #[test]
    fn version_parse_ok() {
        assert_eq!(Version::new(3, 3, 0), "3.3".parse().expect("valid version"));
        assert_eq!(Version::new(3, 2, 1), "3.2.1".parse().expect("valid version"));
        assert_eq!("3.2.1", Version::new(3, 2, 1).to_string());
    }

    #[test]
    fn version_parse_bad() {
        for s in ["", "3", "3.x", "1.2.3.4", "256.0"] {
            s.parse::<Version>().expect_err("expected invalid version");
        }
    }

    #[test]
    fn version_parse_error_message() {
        let err = "3.x".parse::<Version>().expect_err("expected invalid version");

        assert_eq!(ParseVersionError("3.x".to_string()), err);
        assert_eq!("invalid SMBIOS version \"3.x\"", err.to_string());

        // Usable wherever a boxed standard error is expected.
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
