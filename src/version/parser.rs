//! Version string parsers
//!
//! Two modes share one grammar: an optional leading `v`/`=`/whitespace, the
//! major component, optional `.minor` and `.patch`, an optional
//! `-prerelease` and an optional `+build` suffix that is discarded.
//!
//! - Strict ([`parse_version`]): every component is a number, missing
//!   minor/patch default to 0.
//! - Wildcard-tolerant ([`parse_partial_version`]): each component may be
//!   `x`, `X`, `*` or empty, which leaves it unset.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Match, Regex};

use crate::version::error::VersionError;
use crate::version::model::{Identifier, Version};

static STRICT_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[v=\s]*([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?\s*$",
    )
    .expect("strict version pattern is valid")
});

static PARTIAL_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[v=\s]*([0-9]+|[xX*])?(?:\.([0-9]+|[xX*])?)?(?:\.([0-9]+|[xX*])?)?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?\s*$",
    )
    .expect("partial version pattern is valid")
});

/// A version whose major/minor/patch may be left unset
///
/// Only produced while translating ranges; it is always resolved into
/// explicit bounds before any comparison happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialVersion {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub prerelease: Vec<Identifier>,
}

impl PartialVersion {
    /// Returns true when at least one of major/minor/patch is unset
    pub fn has_wildcard(&self) -> bool {
        self.major.is_none() || self.minor.is_none() || self.patch.is_none()
    }

    /// Returns true when nothing is constrained (`*`, `x`, empty input)
    pub fn is_any(&self) -> bool {
        self.major.is_none()
    }

    /// Unset components become 0; the prerelease is kept
    pub fn lower_bound(&self) -> Version {
        Version {
            major: self.major.unwrap_or(0),
            minor: self.minor.unwrap_or(0),
            patch: self.patch.unwrap_or(0),
            prerelease: self.prerelease.clone(),
        }
    }

    /// Exclusive upper edge implied by the first unset component
    ///
    /// - `*` -> None (no bound)
    /// - `1` / `1.x` -> `2.0.0`
    /// - `1.2` / `1.2.x` -> `1.3.0`
    /// - `1.2.3` -> `1.2.4`
    /// - `18446744073709551615.x` -> None (nothing lies above it)
    pub fn wildcard_upper_bound(&self) -> Option<Version> {
        self.major?;
        let lower = self.lower_bound();
        if self.minor.is_none() {
            lower.bump_major()
        } else if self.patch.is_none() {
            lower.bump_minor()
        } else {
            lower.bump_patch()
        }
    }
}

/// Parse a version string strictly, returning None when it is not a version.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "=1.2.3-beta.1+build" -> Version(1, 2, 3, [beta, 1])
/// - "1.x" -> None
pub fn parse_version(text: &str) -> Option<Version> {
    text.parse().ok()
}

/// Parse a version string allowing `x`, `X`, `*` or empty components.
pub fn parse_partial_version(text: &str) -> Option<PartialVersion> {
    text.parse().ok()
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.trim().is_empty() {
            return Err(VersionError::Empty);
        }

        let caps = STRICT_VERSION_RE
            .captures(text)
            .ok_or_else(|| VersionError::InvalidSyntax(text.to_string()))?;

        Ok(Version {
            major: parse_component(caps.get(1))?.unwrap_or(0),
            minor: parse_component(caps.get(2))?.unwrap_or(0),
            patch: parse_component(caps.get(3))?.unwrap_or(0),
            prerelease: split_prerelease(&caps),
        })
    }
}

impl FromStr for PartialVersion {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let caps = PARTIAL_VERSION_RE
            .captures(text)
            .ok_or_else(|| VersionError::InvalidSyntax(text.to_string()))?;

        Ok(PartialVersion {
            major: parse_component(caps.get(1))?,
            minor: parse_component(caps.get(2))?,
            patch: parse_component(caps.get(3))?,
            prerelease: split_prerelease(&caps),
        })
    }
}

/// Wildcard tokens and absent groups resolve to None
fn parse_component(component: Option<Match<'_>>) -> Result<Option<u64>, VersionError> {
    let Some(component) = component else {
        return Ok(None);
    };

    let text = component.as_str();
    if is_wildcard_token(text) {
        return Ok(None);
    }

    text.parse::<u64>()
        .map(Some)
        .map_err(|_| VersionError::ComponentOutOfRange(text.to_string()))
}

fn split_prerelease(caps: &Captures<'_>) -> Vec<Identifier> {
    caps.get(4)
        .map(|pre| pre.as_str().split('.').map(Identifier::new).collect())
        .unwrap_or_default()
}

/// `*`, `x`, `X` and the empty string all mean "any"
pub(crate) fn is_wildcard_token(text: &str) -> bool {
    matches!(text, "" | "*" | "x" | "X")
}
