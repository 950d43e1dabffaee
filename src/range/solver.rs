//! Minimum satisfying version and range overlap
//!
//! A comparator set is read as a single interval `[lower, upper]`. The lowest
//! candidate is the lower bound (one patch above it when exclusive), then it
//! is nudged upward one patch at a time, at most
//! [`MIN_VERSION_NUDGE_LIMIT`] times. This is exact for every set the
//! translator produces; hand-built sets whose true minimum sits less than a
//! patch above the lower bound (for instance one that requires a prerelease)
//! can come back as `None` or a non-minimal version.

use std::cmp::Ordering;

use tracing::debug;

use crate::config::MIN_VERSION_NUDGE_LIMIT;
use crate::range::types::{ComparatorSet, Operator, Range};
use crate::version::compare::compare_versions;
use crate::version::model::Version;

/// One edge of the interval
#[derive(Debug, Clone)]
struct Bound {
    version: Version,
    inclusive: bool,
}

impl Bound {
    /// Keep whichever lower bound is higher; at the same version exclusive wins
    fn tighten_lower(self, candidate: Bound) -> Bound {
        match compare_versions(&candidate.version, &self.version) {
            Ordering::Greater => candidate,
            Ordering::Less => self,
            Ordering::Equal if !candidate.inclusive => candidate,
            Ordering::Equal => self,
        }
    }

    /// Keep whichever upper bound is lower; at the same version exclusive wins
    fn tighten_upper(self, candidate: Bound) -> Bound {
        match compare_versions(&candidate.version, &self.version) {
            Ordering::Less => candidate,
            Ordering::Greater => self,
            Ordering::Equal if !candidate.inclusive => candidate,
            Ordering::Equal => self,
        }
    }
}

fn tighten_upper(upper: Option<Bound>, candidate: Bound) -> Bound {
    match upper {
        Some(upper) => upper.tighten_upper(candidate),
        None => candidate,
    }
}

/// Lowest version satisfying every comparator of the set, if one is found
pub fn min_satisfying_version(set: &ComparatorSet) -> Option<Version> {
    let mut lower = Bound {
        version: Version::new(0, 0, 0),
        inclusive: true,
    };
    let mut upper: Option<Bound> = None;

    for comparator in set {
        let bound = Bound {
            version: comparator.boundary().clone(),
            inclusive: comparator.is_inclusive(),
        };
        match comparator.operator() {
            Operator::Equal => {
                lower = lower.tighten_lower(bound.clone());
                upper = Some(tighten_upper(upper, bound));
            }
            Operator::GreaterThan | Operator::GreaterThanOrEqual => {
                lower = lower.tighten_lower(bound);
            }
            Operator::LessThan | Operator::LessThanOrEqual => {
                upper = Some(tighten_upper(upper, bound));
            }
        }
    }

    if let Some(upper) = &upper {
        match compare_versions(&lower.version, &upper.version) {
            Ordering::Greater => return None,
            Ordering::Equal if !(lower.inclusive && upper.inclusive) => return None,
            _ => {}
        }
    }

    let mut candidate = if lower.inclusive {
        lower.version
    } else {
        lower.version.bump_patch()?
    };

    for _ in 0..MIN_VERSION_NUDGE_LIMIT {
        if set.satisfies(&candidate) {
            return Some(candidate);
        }
        let Some(next) = candidate.bump_patch() else {
            break;
        };
        candidate = next;
    }

    debug!(
        "No version satisfying '{}' within {} patch steps",
        set, MIN_VERSION_NUDGE_LIMIT
    );
    None
}

impl Range {
    /// Lowest version satisfying any alternative
    pub fn min_version(&self) -> Option<Version> {
        self.sets().iter().filter_map(min_satisfying_version).min()
    }

    /// Check if some version satisfies both ranges
    pub fn intersects(&self, other: &Range) -> bool {
        self.sets().iter().any(|a| {
            other
                .sets()
                .iter()
                .any(|b| min_satisfying_version(&a.concat(b)).is_some())
        })
    }
}
