//! Deployment strategy and update acceptance contracts

use crate::error::StrategyError;
use rollout_model::ReplicationController;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// Something that can make a deployment active
///
/// Implementations move a workload from the controller currently serving
/// (`from`, absent on a first deployment) to `to`, driving `to` toward
/// `desired_replicas`.
pub trait DeploymentStrategy: Send + Sync {
    /// Transition `from` to `to`
    ///
    /// # Errors
    /// - [`StrategyError::ConditionReached`] if a declared stop condition
    ///   ended the rollout early
    /// - any other variant if the transition could not be completed
    fn deploy(
        &self,
        from: Option<&ReplicationController>,
        to: &ReplicationController,
        desired_replicas: u32,
    ) -> Result<(), StrategyError>;
}

impl<S: DeploymentStrategy + ?Sized> DeploymentStrategy for Arc<S> {
    fn deploy(
        &self,
        from: Option<&ReplicationController>,
        to: &ReplicationController,
        desired_replicas: u32,
    ) -> Result<(), StrategyError> {
        (**self).deploy(from, to, desired_replicas)
    }
}

/// Gate consulted each time a controller is scaled up
///
/// A rejection is fatal to the current rollout: the strategy stops and
/// returns the acceptor's error.
pub trait UpdateAcceptor: Send + Sync {
    /// Accept or reject a freshly scaled controller
    ///
    /// # Errors
    /// Returns an error if the controller is not acceptable
    fn accept(&self, controller: &ReplicationController) -> Result<(), StrategyError>;
}

impl<F> UpdateAcceptor for F
where
    F: Fn(&ReplicationController) -> Result<(), StrategyError> + Send + Sync,
{
    fn accept(&self, controller: &ReplicationController) -> Result<(), StrategyError> {
        self(controller)
    }
}

/// Kind of rollout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrategyType {
    /// Scale the old controller down, then the new one up
    Recreate,

    /// Replace replicas gradually - default
    #[default]
    Rolling,

    /// User-supplied deployer
    Custom,
}

impl StrategyType {
    /// Lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recreate => "recreate",
            Self::Rolling => "rolling",
            Self::Custom => "custom",
        }
    }
}

impl Display for StrategyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
