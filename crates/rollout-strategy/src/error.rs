//! Error types for rollout contracts
//!
//! [`StrategyError`] is what strategies and acceptors return. Its
//! [`StrategyError::ConditionReached`] variant marks an expected stop of a
//! rollout rather than a failure, and is classified by variant, never by
//! message text.

use std::error::Error;

/// A declared stop condition was hit
///
/// Displays as exactly the message it was built with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{msg}")]
pub struct ConditionReached {
    msg: String,
}

impl ConditionReached {
    /// Create signal carrying `msg`
    #[inline]
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    /// Stored message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

/// Errors returned by deployment strategies and update acceptors
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// Rollout stopped because a declared condition was reached
    #[error(transparent)]
    ConditionReached(#[from] ConditionReached),

    /// An acceptor vetoed the scaled controller
    #[error("controller {controller} rejected: {reason}")]
    Rejected {
        /// Qualified controller name
        controller: String,
        /// Why it was rejected
        reason: String,
    },

    /// Implementation-defined failure
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrategyError {
    /// Create condition-reached error
    #[inline]
    #[must_use]
    pub fn condition_reached(msg: impl Into<String>) -> Self {
        Self::ConditionReached(ConditionReached::new(msg))
    }

    /// Create rejection error
    #[inline]
    #[must_use]
    pub fn rejected(controller: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            controller: controller.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is a condition-reached signal
    #[inline]
    #[must_use]
    pub fn is_condition_reached(&self) -> bool {
        matches!(self, Self::ConditionReached(_))
    }

    /// Check if this error is an acceptance veto
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Check whether an arbitrary error is a condition-reached signal
///
/// Only the top-level value is inspected: it must be a [`ConditionReached`]
/// or a [`StrategyError::ConditionReached`]. Source chains are not walked
/// and `None` is never a signal.
#[must_use]
pub fn is_condition_reached(err: Option<&(dyn Error + 'static)>) -> bool {
    let Some(err) = err else {
        return false;
    };

    err.is::<ConditionReached>()
        || err
            .downcast_ref::<StrategyError>()
            .is_some_and(StrategyError::is_condition_reached)
}
