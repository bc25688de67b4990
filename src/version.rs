// src/version.rs

use std::fmt;
use std::str::FromStr;

/// First release that publishes error codes as errcodes.txt.
/// Anything older only has the HTML appendix table.
pub const TXT_FORMAT_SINCE: Version = Version::new(9, 1);

/// A dotted major.minor release identifier, e.g. "9.4".
/// Ordering is by integer pair, not by string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// "9_4" — used in the REL<x>_STABLE branch name.
    pub fn underscored(&self) -> String {
        format!("{}_{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s.split_once('.').ok_or_else(|| format!("bad version: {s}"))?;
        let major = major.parse().map_err(|_| format!("bad version: {s}"))?;
        let minor = minor.parse().map_err(|_| format!("bad version: {s}"))?;
        Ok(Self { major, minor })
    }
}
