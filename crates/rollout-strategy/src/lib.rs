//! Rollout Strategy Contracts
//!
//! The pluggable pieces an orchestrator uses to roll a deployment from one
//! replication controller to the next.
//!
//! # Core Concepts
//!
//! - [`DeploymentStrategy`]: Moves a workload from the old controller to the new one
//! - [`UpdateAcceptor`]: Approves or vetoes each scale-up of the new controller
//! - [`StrategyError::ConditionReached`]: Expected early stop, distinct from failure
//! - [`percentage`] / [`percentage_between`]: `"<n>%"` parsing
//! - [`UntilCondition`]: Early stop directive (`pre`, `mid`, `50%`, ...)
//! - [`StrategyRegistry`]: Strategy implementations keyed by [`StrategyType`]
//!
//! # Example
//!
//! ```rust
//! use rollout_strategy::{is_condition_reached, percentage, percentage_between, StrategyError};
//!
//! assert_eq!(percentage("50%"), Some(50));
//! assert!(percentage_between("50%", 0, 100));
//! assert!(!percentage_between("50%", 60, 100));
//!
//! let err = StrategyError::condition_reached("timeout");
//! assert_eq!(err.to_string(), "timeout");
//! assert!(is_condition_reached(Some(&err)));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod acceptor;
mod config;
mod error;
mod percentage;
mod registry;
mod strategy;
mod until;

// Re-exports
pub use acceptor::{AcceptAll, AcceptorChain};
pub use config::{ConfigError, StrategyConfig, DEFAULT_TIMEOUT_SECS};
pub use error::{is_condition_reached, ConditionReached, StrategyError};
pub use percentage::{percentage, percentage_between, ParsePercentageError, Percentage};
pub use registry::{RegistryError, StrategyRegistry};
pub use strategy::{DeploymentStrategy, StrategyType, UpdateAcceptor};
pub use until::{LifecyclePoint, UntilCondition, UntilError};

pub use rollout_model::ReplicationController;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
