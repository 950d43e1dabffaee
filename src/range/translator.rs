//! npm-style range translator
//!
//! Supports npm semver range specifications:
//! - `1.2.3` - exact match (>=1.2.3 <=1.2.3)
//! - `^1.2.3` - compatible with version (>=1.2.3 <2.0.0)
//! - `~1.2.3` - approximately equivalent (>=1.2.3 <1.3.0)
//! - `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3` - comparison operators
//! - `1.2.x`, `1.x`, `*` - wildcards
//! - `1.2.3 - 2.3.4` - hyphen ranges
//! - `>=1.0.0 <2.0.0` - AND (space-separated)
//! - `^1.0.0 || ^2.0.0` - OR
//!
//! Translation never fails: a piece that cannot be read contributes no
//! comparators to its alternative.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::range::types::{Comparator, ComparatorSet, Operator, Range};
use crate::version::model::Version;
use crate::version::parser::{PartialVersion, is_wildcard_token};

/// `<min> - <max>` with whitespace on both sides of the hyphen
static HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+-\s+(\S+)$").expect("hyphen pattern is valid"));

/// Whitespace between an operator and its version (`>= 1.2.3`)
static OPERATOR_GAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<=|>=|<|>|=|\^|~>?)\s+").expect("operator gap pattern is valid")
});

impl Range {
    /// Parse a range expression into its normalized form
    pub fn parse(text: &str) -> Self {
        parse_range(text)
    }
}

/// Translate a range expression into OR-combined comparator sets
pub fn parse_range(text: &str) -> Range {
    let sets = text
        .split("||")
        .map(|alternative| parse_alternative(alternative.trim()))
        .collect();
    Range::new(sets)
}

/// Translate one `||` alternative: either a hyphen range or AND-combined tokens
fn parse_alternative(alternative: &str) -> ComparatorSet {
    if let Some(caps) = HYPHEN_RE.captures(alternative) {
        return parse_hyphen(&caps[1], &caps[2]);
    }

    let normalized = OPERATOR_GAP_RE.replace_all(alternative, "$1");
    normalized
        .split_whitespace()
        .flat_map(translate_token)
        .collect()
}

/// `1.2.3 - 2.3.4` -> `>=1.2.3 <=2.3.4`, `1.2 - 2.3` -> `>=1.2.0 <2.4.0`
fn parse_hyphen(min: &str, max: &str) -> ComparatorSet {
    let (Some(min), Some(max)) = (parse_body(min), parse_body(max)) else {
        return ComparatorSet::default();
    };

    let mut comparators = vec![Comparator::greater_than_or_equal(min.lower_bound())];
    if !max.has_wildcard() {
        comparators.push(Comparator::less_than_or_equal(max.lower_bound()));
    } else if let Some(upper) = max.wildcard_upper_bound() {
        comparators.push(Comparator::less_than(upper));
    }
    ComparatorSet::new(comparators)
}

/// Translate a single space-delimited token into zero or more comparators
fn translate_token(token: &str) -> Vec<Comparator> {
    if is_wildcard_token(token) {
        return Vec::new();
    }

    if let Some(body) = token.strip_prefix('^') {
        return parse_body(body)
            .filter(|partial| !partial.is_any())
            .map(|partial| caret(&partial))
            .unwrap_or_default();
    }

    if let Some(body) = token.strip_prefix("~>").or_else(|| token.strip_prefix('~')) {
        return parse_body(body)
            .filter(|partial| !partial.is_any())
            .map(|partial| tilde(&partial))
            .unwrap_or_default();
    }

    let (operator, body) = Operator::split_prefix(token);
    parse_body(body)
        .filter(|partial| !partial.is_any())
        .map(|partial| primitive(operator, &partial))
        .unwrap_or_default()
}

fn parse_body(body: &str) -> Option<PartialVersion> {
    body.parse::<PartialVersion>()
        .inspect_err(|e| debug!("Ignoring unparseable range body '{}': {}", body, e))
        .ok()
}

/// `^1.2.3` -> `>=1.2.3 <2.0.0`, `^0.2.3` -> `>=0.2.3 <0.3.0`, `^0.0.3` -> `>=0.0.3 <0.0.4`
fn caret(partial: &PartialVersion) -> Vec<Comparator> {
    let lower = partial.lower_bound();
    let upper = if lower.major > 0 {
        lower.bump_major()
    } else if lower.minor > 0 {
        lower.bump_minor()
    } else {
        lower.bump_patch()
    };
    half_open(lower, upper)
}

/// `~1.2.3` -> `>=1.2.3 <1.3.0`, `~1` -> `>=1.0.0 <2.0.0`
fn tilde(partial: &PartialVersion) -> Vec<Comparator> {
    let lower = partial.lower_bound();
    let upper = if partial.minor.is_some() {
        lower.bump_minor()
    } else {
        lower.bump_major()
    };
    half_open(lower, upper)
}

/// `>=lower <upper`; no upper comparator when the bump ran past `u64::MAX`
fn half_open(lower: Version, upper: Option<Version>) -> Vec<Comparator> {
    std::iter::once(Comparator::greater_than_or_equal(lower))
        .chain(upper.map(Comparator::less_than))
        .collect()
}

/// Operator followed by a possibly partial version
fn primitive(operator: Operator, partial: &PartialVersion) -> Vec<Comparator> {
    if !partial.has_wildcard() {
        let exact = partial.lower_bound();
        return match operator {
            Operator::Equal => vec![
                Comparator::greater_than_or_equal(exact.clone()),
                Comparator::less_than_or_equal(exact),
            ],
            operator => vec![Comparator::new(operator, exact)],
        };
    }

    // an upper edge past `u64::MAX` bounds nothing
    let upper = partial.wildcard_upper_bound();
    let lower = partial.lower_bound();

    match operator {
        Operator::Equal => half_open(lower, upper),
        Operator::LessThan => upper.map(Comparator::less_than).into_iter().collect(),
        Operator::LessThanOrEqual => upper
            .map(Comparator::less_than_or_equal)
            .into_iter()
            .collect(),
        Operator::GreaterThan => vec![Comparator::greater_than(lower)],
        Operator::GreaterThanOrEqual => vec![Comparator::greater_than_or_equal(lower)],
    }
}
