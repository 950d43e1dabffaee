//! Semver precedence
//!
//! Versions are ordered by major, minor and patch, then by prerelease:
//! a release outranks any prerelease of the same triple, and prerelease
//! identifiers are compared pairwise (numeric by value, numeric below
//! alphanumeric, alphanumeric in ASCII order, a missing identifier below a
//! present one).

use std::cmp::Ordering;

use crate::version::model::{Identifier, Version};

/// Compare two versions under semver precedence rules
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| compare_prerelease(&a.prerelease, &b.prerelease))
}

fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // slice ordering is element-wise, then the shorter one first
        (false, false) => a.cmp(b),
    }
}

fn compare_identifiers(a: &Identifier, b: &Identifier) -> Ordering {
    match (a.is_numeric(), b.is_numeric()) {
        (true, true) => compare_numeric(a.as_str(), b.as_str()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_str().cmp(b.as_str()),
    }
}

/// Numeric comparison of digit strings of any length
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_identifiers(self, other)
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_versions(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
