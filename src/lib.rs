//! Semantic version parsing, comparison and npm-style range solving
//!
//! ```
//! use semver_engine::{coerce, intersects, min_version, satisfies};
//!
//! assert!(satisfies("1.4.0", "^1.2.3"));
//! assert_eq!(min_version(">1.0.0 <2.0.0").unwrap().to_string(), "1.0.1");
//! assert!(!intersects("1.x", "2.x"));
//! assert_eq!(coerce("v1.2.3-ignored").unwrap().to_string(), "1.2.3");
//! ```

pub mod config;
pub mod engine;
pub mod range;
pub mod version;

pub use engine::{VersionInput, compare, intersects, min_version, satisfies};
pub use range::{Comparator, ComparatorSet, Operator, Range};
pub use version::coerce::{Coercible, coerce};
pub use version::model::{Identifier, Version};
pub use version::parser::{PartialVersion, parse_partial_version, parse_version};
