//! Text-level entry points
//!
//! Every operation here is total: unreadable input degrades to `None`,
//! `false` or `Ordering::Equal` instead of an error.

use std::borrow::Cow;
use std::cmp::Ordering;

use tracing::trace;

use crate::range::types::Range;
use crate::version::compare::compare_versions;
use crate::version::model::Version;
use crate::version::parser::parse_version;

/// Anything that may hold a version: a parsed [`Version`] or its text
pub trait VersionInput {
    fn to_version(&self) -> Option<Cow<'_, Version>>;
}

impl VersionInput for Version {
    fn to_version(&self) -> Option<Cow<'_, Version>> {
        Some(Cow::Borrowed(self))
    }
}

impl VersionInput for str {
    fn to_version(&self) -> Option<Cow<'_, Version>> {
        parse_version(self).map(Cow::Owned)
    }
}

impl VersionInput for String {
    fn to_version(&self) -> Option<Cow<'_, Version>> {
        self.as_str().to_version()
    }
}

/// Compare two versions; `Ordering::Equal` when either one cannot be parsed
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: VersionInput + ?Sized,
    B: VersionInput + ?Sized,
{
    match (a.to_version(), b.to_version()) {
        (Some(a), Some(b)) => compare_versions(&a, &b),
        _ => {
            trace!("Comparing an unparseable version, treating as equal");
            Ordering::Equal
        }
    }
}

/// Check if a version satisfies a range expression
pub fn satisfies<V: VersionInput + ?Sized>(version: &V, range: &str) -> bool {
    let Some(version) = version.to_version() else {
        trace!("Unparseable version never satisfies '{}'", range);
        return false;
    };
    Range::parse(range).satisfies(&version)
}

/// Lowest version satisfying a range expression
pub fn min_version(range: &str) -> Option<Version> {
    Range::parse(range).min_version()
}

/// Check if two range expressions share at least one version
pub fn intersects(a: &str, b: &str) -> bool {
    Range::parse(a).intersects(&Range::parse(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", "2.0.0", Ordering::Less)]
    #[case("2.0.0", "1.0.0", Ordering::Greater)]
    #[case("1.0.0", "v1.0.0", Ordering::Equal)]
    #[case("1.0.0-alpha", "1.0.0", Ordering::Less)]
    #[case("invalid", "1.0.0", Ordering::Equal)]
    #[case("1.0.0", "", Ordering::Equal)]
    fn compare_text(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare(a, b), expected);
    }

    #[test]
    fn compare_mixed_inputs() {
        let parsed = Version::new(1, 2, 3);
        let owned = String::from("1.2.4");

        assert_eq!(compare(&parsed, "1.2.3"), Ordering::Equal);
        assert_eq!(compare(&parsed, &owned), Ordering::Less);
        assert_eq!(compare(&owned, &parsed), Ordering::Greater);
    }

    #[rstest]
    #[case("1.2.3", "^1.2.3", true)]
    #[case("2.0.0", "^1.2.3", false)]
    #[case("not a version", "*", false)]
    #[case("", "*", false)]
    fn satisfies_text(#[case] version: &str, #[case] range: &str, #[case] expected: bool) {
        assert_eq!(satisfies(version, range), expected);
    }

    #[test]
    fn satisfies_parsed_version() {
        assert!(satisfies(&Version::new(1, 5, 0), "~1.5.0"));
    }

    #[test]
    fn min_version_and_intersects_delegate_to_range() {
        assert_eq!(min_version("^1.2.3"), Some(Version::new(1, 2, 3)));
        assert!(intersects("1.x", "1.2.x"));
        assert!(!intersects("1.x", "2.x"));
    }
}
