//! Deploy-until conditions
//!
//! A rollout can be told to stop early, either at a lifecycle point or once
//! the new controller holds a share of the desired replicas. Reaching the
//! condition is reported with [`ConditionReached`].

use crate::error::ConditionReached;
use crate::percentage::{percentage_between, Percentage};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Points in a rollout's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePoint {
    /// Before anything runs
    Start,
    /// After the pre hook
    Pre,
    /// After the mid hook
    Mid,
    /// After the post hook
    Post,
}

impl LifecyclePoint {
    /// Lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pre => "pre",
            Self::Mid => "mid",
            Self::Post => "post",
        }
    }
}

/// When a rollout should stop early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UntilCondition {
    /// Stop at a lifecycle point
    Lifecycle(LifecyclePoint),

    /// Stop once this share of desired replicas runs on the new controller
    Percentage(Percentage),
}

impl UntilCondition {
    /// Check if this condition names `point`
    #[inline]
    #[must_use]
    pub fn is_reached_at(self, point: LifecyclePoint) -> bool {
        self == Self::Lifecycle(point)
    }

    /// Check if `current` replicas satisfy a percentage condition
    ///
    /// Always false for lifecycle conditions.
    #[must_use]
    pub fn is_reached_by(self, current: u32, desired: u32) -> bool {
        match self {
            Self::Percentage(pct) => current >= pct.of(desired),
            Self::Lifecycle(_) => false,
        }
    }

    /// Signal that this condition was reached
    #[must_use]
    pub fn reached(self) -> ConditionReached {
        ConditionReached::new(format!("reached {self}"))
    }
}

impl Display for UntilCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lifecycle(point) => f.write_str(point.as_str()),
            Self::Percentage(pct) => write!(f, "{pct}"),
        }
    }
}

impl FromStr for UntilCondition {
    type Err = UntilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Lifecycle(LifecyclePoint::Start)),
            "pre" => Ok(Self::Lifecycle(LifecyclePoint::Pre)),
            "mid" => Ok(Self::Lifecycle(LifecyclePoint::Mid)),
            "post" => Ok(Self::Lifecycle(LifecyclePoint::Post)),
            _ if percentage_between(s, 0, 100) => s
                .parse()
                .map(Self::Percentage)
                .map_err(|_| UntilError::Invalid(s.to_string())),
            _ => Err(UntilError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<String> for UntilCondition {
    type Error = UntilError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UntilCondition> for String {
    fn from(value: UntilCondition) -> Self {
        value.to_string()
    }
}

/// Errors parsing an [`UntilCondition`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UntilError {
    /// Not a lifecycle point or a percentage in `[0, 100]`
    #[error("invalid until condition '{0}': expected start, pre, mid, post or 0%-100%")]
    Invalid(String),
}
