//! Range evaluation
//!
//! A comparator holds when `compare_versions(version, boundary)` agrees with
//! its operator; a set holds when all comparators do; a range holds when any
//! set does.

use std::cmp::Ordering;

use crate::range::types::{Comparator, ComparatorSet, Operator, Range};
use crate::version::compare::compare_versions;
use crate::version::model::Version;
use crate::version::parser::parse_version;

impl Comparator {
    /// Check if a version satisfies this comparator
    pub fn matches(&self, version: &Version) -> bool {
        let ordering = compare_versions(version, self.boundary());
        match self.operator() {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

/// Check if a version satisfies every comparator of the set
pub fn satisfies_comparators(version: &Version, set: &ComparatorSet) -> bool {
    set.iter().all(|comparator| comparator.matches(version))
}

impl ComparatorSet {
    pub fn satisfies(&self, version: &Version) -> bool {
        satisfies_comparators(version, self)
    }
}

impl Range {
    /// Check if a version satisfies at least one alternative
    pub fn satisfies(&self, version: &Version) -> bool {
        self.sets().iter().any(|set| set.satisfies(version))
    }
}

/// Highest available version satisfying the range
///
/// Unparseable entries are skipped.
pub fn max_satisfying<S: AsRef<str>>(available_versions: &[S], range: &Range) -> Option<Version> {
    available_versions
        .iter()
        .filter_map(|v| parse_version(v.as_ref()))
        .filter(|v| range.satisfies(v))
        .max()
}

/// Lowest available version satisfying the range
///
/// Unparseable entries are skipped.
pub fn min_satisfying<S: AsRef<str>>(available_versions: &[S], range: &Range) -> Option<Version> {
    available_versions
        .iter()
        .filter_map(|v| parse_version(v.as_ref()))
        .filter(|v| range.satisfies(v))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn satisfies(version: &str, range: &str) -> bool {
        Range::parse(range).satisfies(&parse_version(version).unwrap())
    }

    #[rstest]
    #[case(Operator::Equal, "1.2.3", true)]
    #[case(Operator::Equal, "1.2.4", false)]
    #[case(Operator::LessThan, "1.2.2", true)]
    #[case(Operator::LessThan, "1.2.3", false)]
    #[case(Operator::LessThanOrEqual, "1.2.3", true)]
    #[case(Operator::LessThanOrEqual, "1.2.4", false)]
    #[case(Operator::GreaterThan, "1.2.4", true)]
    #[case(Operator::GreaterThan, "1.2.3", false)]
    #[case(Operator::GreaterThanOrEqual, "1.2.3", true)]
    #[case(Operator::GreaterThanOrEqual, "1.2.3-rc.1", false)]
    fn comparator_matches(#[case] op: Operator, #[case] version: &str, #[case] expected: bool) {
        let comparator = Comparator::new(op, Version::new(1, 2, 3));
        assert_eq!(comparator.matches(&parse_version(version).unwrap()), expected);
    }

    #[test]
    fn empty_set_matches_everything() {
        let set = ComparatorSet::default();
        assert!(satisfies_comparators(&Version::new(0, 0, 0), &set));
        assert!(satisfies_comparators(&Version::new(999, 0, 0), &set));
    }

    // caret (^) range
    #[rstest]
    #[case("1.2.3", "^1.2.3", true)]
    #[case("1.9.9", "^1.2.3", true)]
    #[case("1.2.2", "^1.2.3", false)]
    #[case("2.0.0", "^1.2.3", false)]
    #[case("0.2.3", "^0.2.3", true)]
    #[case("0.2.9", "^0.2.3", true)]
    #[case("0.3.0", "^0.2.3", false)]
    #[case("0.0.3", "^0.0.3", true)]
    #[case("0.0.4", "^0.0.3", false)]
    fn satisfies_caret_range(#[case] version: &str, #[case] range: &str, #[case] expected: bool) {
        assert_eq!(satisfies(version, range), expected);
    }

    // tilde (~) range
    #[rstest]
    #[case("1.2.3", "~1.2.3", true)]
    #[case("1.2.9", "~1.2.3", true)]
    #[case("1.2.2", "~1.2.3", false)]
    #[case("1.3.0", "~1.2.3", false)]
    #[case("1.9.0", "~1", true)]
    #[case("2.0.0", "~1", false)]
    fn satisfies_tilde_range(#[case] version: &str, #[case] range: &str, #[case] expected: bool) {
        assert_eq!(satisfies(version, range), expected);
    }

    // hyphen range
    #[rstest]
    #[case("1.2.3", "1.2.3 - 2.3.4", true)]
    #[case("1.2.5", "1.2.3 - 2.3.4", true)]
    #[case("2.3.4", "1.2.3 - 2.3.4", true)]
    #[case("1.2.2", "1.2.3 - 2.3.4", false)]
    #[case("2.3.5", "1.2.3 - 2.3.4", false)]
    #[case("2.3.9", "1.2.3 - 2.3", true)]
    #[case("2.4.0", "1.2.3 - 2.3", false)]
    fn satisfies_hyphen_range(#[case] version: &str, #[case] range: &str, #[case] expected: bool) {
        assert_eq!(satisfies(version, range), expected);
    }

    // wildcards
    #[rstest]
    #[case("1.2.9", "1.2.x", true)]
    #[case("1.2.0", "1.2.x", true)]
    #[case("1.3.0", "1.2.x", false)]
    #[case("1.1.9", "1.2.x", false)]
    #[case("1.5.0", "1.X", true)]
    #[case("2.0.0", "1.x", false)]
    #[case("0.0.1", "*", true)]
    #[case("999.0.0", "*", true)]
    #[case("1.0.0-alpha", "*", true)]
    #[case("5.0.0", "", true)]
    fn satisfies_wildcards(#[case] version: &str, #[case] range: &str, #[case] expected: bool) {
        assert_eq!(satisfies(version, range), expected);
    }

    // OR / AND combinations
    #[rstest]
    #[case("3.0.0", "1.x || 3.x", true)]
    #[case("2.0.0", "1.x || 3.x", false)]
    #[case("1.2.0", ">=1.0.0 <1.5.0 || >=2.0.0", true)]
    #[case("1.6.0", ">=1.0.0 <1.5.0 || >=2.0.0", false)]
    #[case("2.5.0", ">=1.0.0 <1.5.0 || >=2.0.0", true)]
    #[case("1.0.1", ">1.0.0 <=2.0.0", true)]
    #[case("1.0.0", ">1.0.0 <=2.0.0", false)]
    #[case("2.0.0", "1.0.0 || 2.0.0 || 3.0.0", true)]
    #[case("4.0.0", "1.0.0 || 2.0.0 || 3.0.0", false)]
    fn satisfies_compound_ranges(
        #[case] version: &str,
        #[case] range: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(satisfies(version, range), expected);
    }

    #[rstest]
    #[case(&["1.2.3", "1.2.5", "1.3.0", "2.0.0"], "^1.2.3", Some("1.3.0"))]
    #[case(&["1.2.3", "1.2.5", "1.3.0", "2.0.0"], "~1.2.3", Some("1.2.5"))]
    #[case(&["invalid", "1.0.0"], "*", Some("1.0.0"))]
    #[case(&["1.0.0", "1.1.0"], "^2.0.0", None)]
    #[case(&[], "*", None)]
    fn max_satisfying_returns_highest(
        #[case] available: &[&str],
        #[case] range: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            max_satisfying(available, &Range::parse(range)).map(|v| v.to_string()),
            expected.map(str::to_string)
        );
    }

    #[rstest]
    #[case(&["2.0.0", "1.3.0", "1.2.5", "1.2.3"], "^1.2.4", Some("1.2.5"))]
    #[case(&["not-a-version"], "*", None)]
    fn min_satisfying_returns_lowest(
        #[case] available: &[&str],
        #[case] range: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            min_satisfying(available, &Range::parse(range)).map(|v| v.to_string()),
            expected.map(str::to_string)
        );
    }
}
