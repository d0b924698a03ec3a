//! API version numbers.
//!
//! Registry features carry a `number` such as `"1.0"` or `"4.5"`. Versions
//! order numerically by `(major, minor)`, so `"4.10"` sorts after `"4.9"`.

use crate::error::GlowError;
use serde::{Deserialize, Serialize};

/// A `major.minor` API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl std::str::FromStr for Version {
    type Err = GlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| GlowError::InvalidVersion {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| invalid("expected `major.minor`"))?;
        let major =
            parse_component(major).ok_or_else(|| invalid("major component is not a number"))?;
        let minor =
            parse_component(minor).ok_or_else(|| invalid("minor component is not a number"))?;
        Ok(Self { major, minor })
    }
}

/// Digits only: `u32::from_str` alone would accept a leading `+`.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl TryFrom<String> for Version {
    type Error = GlowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_parse() {
        assert_eq!("1.0".parse::<Version>().unwrap(), Version::new(1, 0));
        assert_eq!("4.5".parse::<Version>().unwrap(), Version::new(4, 5));
        assert_eq!("4.10".parse::<Version>().unwrap(), Version::new(4, 10));
    }

    #[test]
    fn version_rejects_malformed_input() {
        for input in [
            "", "4", "4.", ".5", "four.five", "4.5.1", "-1.0", "+4.5", "4.+5", "+4.+5", " 3.2 ",
            "4 .5",
        ] {
            let err = input.parse::<Version>().unwrap_err();
            assert!(
                matches!(err, GlowError::InvalidVersion { .. }),
                "unexpected error for {input:?}: {err}"
            );
        }
    }

    #[test]
    fn version_ordering_is_numeric() {
        let v4_9: Version = "4.9".parse().unwrap();
        let v4_10: Version = "4.10".parse().unwrap();
        assert!(v4_9 < v4_10);
        assert!(Version::new(1, 5) < Version::new(2, 0));
    }

    #[test]
    fn version_serde_uses_dotted_string() {
        let json = serde_json::to_string(&Version::new(3, 3)).unwrap();
        assert_eq!(json, "\"3.3\"");
        let back: Version = serde_json::from_str("\"2.1\"").unwrap();
        assert_eq!(back, Version::new(2, 1));
        assert!(serde_json::from_str::<Version>("\"x\"").is_err());
    }
}
