//! Normalized range types
//!
//! A [`Range`] is an OR of [`ComparatorSet`]s, each an AND of
//! [`Comparator`]s. Shorthand forms (`^`, `~`, hyphen, wildcards) never
//! appear here; the translator has already expanded them.

use std::fmt;

use crate::version::model::Version;

/// Comparison operators for comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// Split a leading operator off `text`, defaulting to `=` when none is present
    pub fn split_prefix(text: &str) -> (Self, &str) {
        const PREFIXES: [(&str, Operator); 5] = [
            ("<=", Operator::LessThanOrEqual),
            (">=", Operator::GreaterThanOrEqual),
            ("<", Operator::LessThan),
            (">", Operator::GreaterThan),
            ("=", Operator::Equal),
        ];

        PREFIXES
            .iter()
            .find_map(|(prefix, op)| text.strip_prefix(*prefix).map(|rest| (*op, rest)))
            .unwrap_or((Operator::Equal, text))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Whether a version equal to the boundary satisfies the operator
    pub fn is_inclusive(&self) -> bool {
        matches!(
            self,
            Operator::Equal | Operator::LessThanOrEqual | Operator::GreaterThanOrEqual
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `version OP boundary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    operator: Operator,
    boundary: Version,
}

impl Comparator {
    pub fn new(operator: Operator, boundary: Version) -> Self {
        Self { operator, boundary }
    }

    pub fn equal(boundary: Version) -> Self {
        Self::new(Operator::Equal, boundary)
    }

    pub fn less_than(boundary: Version) -> Self {
        Self::new(Operator::LessThan, boundary)
    }

    pub fn less_than_or_equal(boundary: Version) -> Self {
        Self::new(Operator::LessThanOrEqual, boundary)
    }

    pub fn greater_than(boundary: Version) -> Self {
        Self::new(Operator::GreaterThan, boundary)
    }

    pub fn greater_than_or_equal(boundary: Version) -> Self {
        Self::new(Operator::GreaterThanOrEqual, boundary)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn boundary(&self) -> &Version {
        &self.boundary
    }

    pub fn is_inclusive(&self) -> bool {
        self.operator.is_inclusive()
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.boundary)
    }
}

/// Comparators that must all hold; an empty set matches every version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparatorSet(Vec<Comparator>);

impl ComparatorSet {
    pub fn new(comparators: Vec<Comparator>) -> Self {
        Self(comparators)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comparator> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// AND of both sets, `self` first
    pub fn concat(&self, other: &ComparatorSet) -> ComparatorSet {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl FromIterator<Comparator> for ComparatorSet {
    fn from_iter<I: IntoIterator<Item = Comparator>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ComparatorSet {
    type Item = &'a Comparator;
    type IntoIter = std::slice::Iter<'a, Comparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut comparators = self.0.iter();
        match comparators.next() {
            None => return f.write_str("*"),
            Some(first) => write!(f, "{first}")?,
        }
        for comparator in comparators {
            write!(f, " {comparator}")?;
        }
        Ok(())
    }
}

/// Alternatives of which at least one must hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    sets: Vec<ComparatorSet>,
}

impl Range {
    /// Builds a range from its alternatives; no alternatives means "any"
    pub fn new(sets: Vec<ComparatorSet>) -> Self {
        if sets.is_empty() {
            return Self::any();
        }
        Self { sets }
    }

    /// A range with a single empty set
    pub fn any() -> Self {
        Self {
            sets: vec![ComparatorSet::default()],
        }
    }

    pub fn sets(&self) -> &[ComparatorSet] {
        &self.sets
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sets = self.sets.iter();
        if let Some(first) = sets.next() {
            write!(f, "{first}")?;
        }
        for set in sets {
            write!(f, " || {set}")?;
        }
        Ok(())
    }
}
