//! Strategy registry
//!
//! Provides [`StrategyRegistry`], the table an orchestrator fills with its
//! strategy implementations and consults when a rollout starts.

use crate::config::StrategyConfig;
use crate::error::StrategyError;
use crate::strategy::{DeploymentStrategy, StrategyType};
use crate::until::LifecyclePoint;
use indexmap::IndexMap;
use rollout_model::ReplicationController;
use std::fmt;
use std::sync::Arc;

/// Registry of deployment strategies keyed by [`StrategyType`]
///
/// Iteration follows registration order.
#[derive(Default, Clone)]
pub struct StrategyRegistry {
    strategies: IndexMap<StrategyType, Arc<dyn DeploymentStrategy>>,
}

impl StrategyRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy, returning the one it replaced
    pub fn register(
        &mut self,
        kind: StrategyType,
        strategy: Arc<dyn DeploymentStrategy>,
    ) -> Option<Arc<dyn DeploymentStrategy>> {
        tracing::debug!(strategy = %kind, "registering deployment strategy");
        self.strategies.insert(kind, strategy)
    }

    /// Register a strategy, builder style
    #[inline]
    #[must_use]
    pub fn with(mut self, kind: StrategyType, strategy: impl DeploymentStrategy + 'static) -> Self {
        self.register(kind, Arc::new(strategy));
        self
    }

    /// Look up a strategy
    ///
    /// # Errors
    /// Returns [`RegistryError::NotRegistered`] if nothing is registered
    /// for `kind`
    pub fn get(&self, kind: StrategyType) -> Result<Arc<dyn DeploymentStrategy>, RegistryError> {
        self.strategies
            .get(&kind)
            .cloned()
            .ok_or(RegistryError::NotRegistered(kind))
    }

    /// Check if a strategy is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: StrategyType) -> bool {
        self.strategies.contains_key(&kind)
    }

    /// Remove strategy
    #[inline]
    pub fn remove(&mut self, kind: StrategyType) -> bool {
        self.strategies.shift_remove(&kind).is_some()
    }

    /// Registered strategy types in registration order
    #[inline]
    #[must_use]
    pub fn types(&self) -> Vec<StrategyType> {
        self.strategies.keys().copied().collect()
    }

    /// Get number of registered strategies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run the configured strategy
    ///
    /// A missing strategy is reported as [`StrategyError::Other`]. An
    /// `until: start` condition stops the rollout before the strategy runs.
    /// Other `until` conditions and the timeout are enforced by the strategy
    /// itself. Strategy errors are returned unchanged; a reached condition
    /// is logged as an expected stop.
    ///
    /// # Errors
    /// Returns the strategy's error, or a lookup failure
    pub fn deploy(
        &self,
        config: &StrategyConfig,
        from: Option<&ReplicationController>,
        to: &ReplicationController,
        desired_replicas: u32,
    ) -> Result<(), StrategyError> {
        let strategy = self
            .get(config.strategy)
            .map_err(|e| StrategyError::Other(e.into()))?;

        if let Some(until) = config.until.filter(|u| u.is_reached_at(LifecyclePoint::Start)) {
            let reached = until.reached();
            tracing::info!(
                strategy = %config.strategy,
                to = %to,
                condition = %reached,
                "deployment stopped before start"
            );
            return Err(reached.into());
        }

        tracing::info!(
            strategy = %config.strategy,
            from = ?from.map(ReplicationController::qualified_name),
            to = %to,
            desired_replicas,
            until = ?config.until.map(|u| u.to_string()),
            timeout_secs = config.timeout_secs,
            "starting deployment"
        );

        match strategy.deploy(from, to, desired_replicas) {
            Ok(()) => {
                tracing::info!(to = %to, "deployment complete");
                Ok(())
            }
            Err(error) if error.is_condition_reached() => {
                tracing::info!(to = %to, %error, "deployment stopped at condition");
                Err(error)
            }
            Err(error) => {
                tracing::warn!(to = %to, %error, "deployment failed");
                Err(error)
            }
        }
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("types", &self.types())
            .finish()
    }
}

/// Registry lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No strategy registered for the type
    #[error("no deployment strategy registered for type '{0}'")]
    NotRegistered(StrategyType),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct Noop;

    impl DeploymentStrategy for Noop {
        fn deploy(
            &self,
            _from: Option<&ReplicationController>,
            _to: &ReplicationController,
            _desired_replicas: u32,
        ) -> Result<(), StrategyError> {
            Ok(())
        }
    }

    #[test]
    fn registry_new_empty() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let registry = StrategyRegistry::new()
            .with(StrategyType::Recreate, Noop)
            .with(StrategyType::Rolling, Noop);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(StrategyType::Recreate));
        assert!(registry.get(StrategyType::Rolling).is_ok());
        assert_eq!(
            registry.types(),
            vec![StrategyType::Recreate, StrategyType::Rolling]
        );
    }

    #[test]
    fn registry_register_replaces() {
        let mut registry = StrategyRegistry::new();
        assert!(registry
            .register(StrategyType::Custom, Arc::new(Noop))
            .is_none());
        assert!(registry
            .register(StrategyType::Custom, Arc::new(Noop))
            .is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_get_missing() {
        let registry = StrategyRegistry::new();
        let err = registry.get(StrategyType::Custom).err().unwrap();
        assert_eq!(err, RegistryError::NotRegistered(StrategyType::Custom));
        assert_eq!(
            err.to_string(),
            "no deployment strategy registered for type 'custom'"
        );
    }

    #[test]
    fn registry_remove_keeps_order() {
        let mut registry = StrategyRegistry::new()
            .with(StrategyType::Recreate, Noop)
            .with(StrategyType::Rolling, Noop)
            .with(StrategyType::Custom, Noop);

        assert!(registry.remove(StrategyType::Rolling));
        assert!(!registry.remove(StrategyType::Rolling));
        assert_eq!(
            registry.types(),
            vec![StrategyType::Recreate, StrategyType::Custom]
        );
    }

    #[test]
    fn registry_deploy_missing_strategy() {
        let registry = StrategyRegistry::new();
        let config = StrategyConfig::new(StrategyType::Recreate);
        let to = ReplicationController::new("api", 1);

        let err = registry.deploy(&config, None, &to, 1).unwrap_err();
        assert!(!err.is_condition_reached());
        assert!(err.to_string().contains("'recreate'"));
    }

    #[derive(Debug, Default)]
    struct Counting {
        calls: AtomicU32,
    }

    impl DeploymentStrategy for Counting {
        fn deploy(
            &self,
            _from: Option<&ReplicationController>,
            _to: &ReplicationController,
            _desired_replicas: u32,
        ) -> Result<(), StrategyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn registry_deploy_until_start_skips_strategy() {
        let counting = Arc::new(Counting::default());
        let mut registry = StrategyRegistry::new();
        registry.register(StrategyType::Rolling, counting.clone());

        let config = StrategyConfig::from_yaml("strategy: rolling\nuntil: start\ntimeoutSecs: 1\n")
            .unwrap();
        let to = ReplicationController::new("api", 2);

        let err = registry.deploy(&config, None, &to, 3).unwrap_err();
        assert!(err.is_condition_reached());
        assert_eq!(err.to_string(), "reached start");
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn registry_deploy_other_until_runs_strategy() {
        let counting = Arc::new(Counting::default());
        let mut registry = StrategyRegistry::new();
        registry.register(StrategyType::Rolling, counting.clone());

        let config = StrategyConfig::from_yaml("strategy: rolling\nuntil: mid\n").unwrap();
        let to = ReplicationController::new("api", 2);

        assert!(registry.deploy(&config, None, &to, 3).is_ok());
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_debug_lists_types() {
        let registry = StrategyRegistry::new().with(StrategyType::Rolling, Noop);
        assert_eq!(
            format!("{registry:?}"),
            "StrategyRegistry { types: [Rolling] }"
        );
    }
}
