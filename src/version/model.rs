//! In-memory version model
//!
//! A [`Version`] is an immutable value: the bump helpers always build a new
//! instance, so a version used as a range boundary is never changed in place.
//! Ordering lives in [`crate::version::compare`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single dot-separated prerelease identifier (`alpha`, `1`, `rc-2`)
///
/// The original token text is kept as-is. An identifier made only of ASCII
/// digits is numeric and compares by value.
#[derive(Debug, Clone)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the identifier is composed entirely of digits
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed semantic version
///
/// The canonical text form is produced by [`fmt::Display`]:
/// `major.minor.patch` followed by `-` and the dot-joined prerelease
/// identifiers when there are any. Build metadata is never stored.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
        }
    }

    /// Returns a copy of this version carrying the given prerelease identifiers
    pub fn with_prerelease<I, S>(&self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prerelease: identifiers.into_iter().map(Identifier::new).collect(),
            ..self.clone()
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// `1.2.3-beta` -> `2.0.0`, None when major is already `u64::MAX`
    pub fn bump_major(&self) -> Option<Self> {
        let major = self.major.checked_add(1)?;
        Some(Self::new(major, 0, 0))
    }

    /// `1.2.3-beta` -> `1.3.0`
    ///
    /// A minor at `u64::MAX` carries into major: no version lies between
    /// `1.18446744073709551615.x` and `2.0.0`.
    pub fn bump_minor(&self) -> Option<Self> {
        match self.minor.checked_add(1) {
            Some(minor) => Some(Self::new(self.major, minor, 0)),
            None => self.bump_major(),
        }
    }

    /// `1.2.3-beta` -> `1.2.4`, carrying into minor like `bump_minor`
    pub fn bump_patch(&self) -> Option<Self> {
        match self.patch.checked_add(1) {
            Some(patch) => Some(Self::new(self.major, self.minor, patch)),
            None => self.bump_minor(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        let mut identifiers = self.prerelease.iter();
        if let Some(first) = identifiers.next() {
            write!(f, "-{first}")?;
            for identifier in identifiers {
                write!(f, ".{identifier}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
