//! Best-effort version extraction
//!
//! Numbers are turned into text and parsed strictly. Text is scanned for the
//! first `digits[.digits[.digits]]` run; prerelease and build data are dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::model::Version;
use crate::version::parser::parse_version;

static COERCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?").expect("coerce pattern is valid")
});

/// Input accepted by [`coerce`]
pub trait Coercible {
    fn coerce(&self) -> Option<Version>;
}

/// Extract a version triple from loosely formatted input.
///
/// Examples:
/// - "v1.2.3-ignored-suffix" -> 1.2.3
/// - "release 2.4" -> 2.4.0
/// - 42 -> 42.0.0
/// - "no digits here" -> None
pub fn coerce<T: Coercible + ?Sized>(input: &T) -> Option<Version> {
    input.coerce()
}

fn coerce_text(text: &str) -> Option<Version> {
    let caps = COERCE_RE.captures(text)?;
    let component = |index: usize| -> Option<u64> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some(Version::new(component(1)?, component(2)?, component(3)?))
}

impl Coercible for str {
    fn coerce(&self) -> Option<Version> {
        coerce_text(self)
    }
}

impl Coercible for String {
    fn coerce(&self) -> Option<Version> {
        coerce_text(self)
    }
}

macro_rules! coerce_number {
    ($($ty:ty),*) => {
        $(
            impl Coercible for $ty {
                fn coerce(&self) -> Option<Version> {
                    parse_version(&self.to_string())
                }
            }
        )*
    };
}

coerce_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
