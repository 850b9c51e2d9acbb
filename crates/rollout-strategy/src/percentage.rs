//! Percentage strings
//!
//! Parses values of the form `"<integer>%"`, as used by rollout directives
//! such as `until: 50%`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// A parsed `"<integer>%"` value
///
/// The integer is not range-checked; use [`Percentage::between`] when a
/// bound applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Percentage(i64);

impl Percentage {
    /// Wrap a raw value
    #[inline]
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value
    #[inline]
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }

    /// Check `min <= value <= max`
    #[inline]
    #[must_use]
    pub fn between(self, min: i64, max: i64) -> bool {
        self.0 >= min && self.0 <= max
    }

    /// This percentage of `total`, rounded up
    ///
    /// Negative percentages yield zero; results past `u32::MAX` saturate.
    #[must_use]
    pub fn of(self, total: u32) -> u32 {
        let scaled = i128::from(total) * i128::from(self.0);
        if scaled <= 0 {
            return 0;
        }
        u32::try_from((scaled + 99) / 100).unwrap_or(u32::MAX)
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Percentage {
    type Err = ParsePercentageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_suffix('%')
            .ok_or_else(|| ParsePercentageError::MissingSuffix(s.to_string()))?;

        digits
            .parse::<i64>()
            .map(Self)
            .map_err(|source| ParsePercentageError::InvalidNumber {
                input: s.to_string(),
                source,
            })
    }
}

impl TryFrom<String> for Percentage {
    type Error = ParsePercentageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Percentage> for String {
    fn from(value: Percentage) -> Self {
        value.to_string()
    }
}

/// Errors parsing a [`Percentage`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePercentageError {
    /// Input does not end with `%`
    #[error("'{0}' is not a percentage: missing '%' suffix")]
    MissingSuffix(String),

    /// Text before `%` is not a base-10 integer
    #[error("'{input}' is not a percentage: {source}")]
    InvalidNumber {
        /// Original input
        input: String,
        /// Integer parse failure
        #[source]
        source: ParseIntError,
    },
}

/// Parse `"<integer>%"` into its integer
///
/// Returns `None` when the `%` suffix is missing or the prefix is not a
/// signed base-10 integer (including an empty prefix).
#[inline]
#[must_use]
pub fn percentage(text: &str) -> Option<i64> {
    text.parse::<Percentage>().ok().map(Percentage::value)
}

/// Check that `text` parses as a percentage within `[min, max]`
///
/// `min <= max` is not checked; an inverted range matches nothing.
#[inline]
#[must_use]
pub fn percentage_between(text: &str, min: i64, max: i64) -> bool {
    text.parse::<Percentage>()
        .is_ok_and(|pct| pct.between(min, max))
}
