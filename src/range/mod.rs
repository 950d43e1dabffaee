//! Range layer: translation, evaluation and interval solving
//!
//! # Modules
//!
//! - [`types`]: `Operator`, `Comparator`, `ComparatorSet`, `Range`
//! - [`translator`]: range text to normalized comparator sets
//! - [`evaluator`]: does a version satisfy a set / range
//! - [`solver`]: minimum satisfying version and range overlap

pub mod evaluator;
pub mod solver;
pub mod translator;
pub mod types;

pub use evaluator::{max_satisfying, min_satisfying, satisfies_comparators};
pub use solver::min_satisfying_version;
pub use translator::parse_range;
pub use types::{Comparator, ComparatorSet, Operator, Range};
