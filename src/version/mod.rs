//! Version layer: model, parsing, precedence and coercion
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    text     │────▶│   Parser    │────▶│   Version   │
//! │             │     │(strict/wild)│     │   (model)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │   Coerce    │                         │   Compare   │
//! │(best effort)│                         │(precedence) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`model`]: `Version` and prerelease `Identifier`
//! - [`parser`]: strict and wildcard-tolerant parsers
//! - [`compare`]: semver precedence (`Ord` for `Version`)
//! - [`coerce`]: version extraction from loose input
//! - [`error`]: parse error type

pub mod coerce;
pub mod compare;
pub mod error;
pub mod model;
pub mod parser;
