//! Rollout Model
//!
//! Records for the replicated process groups that rollout contracts pass
//! around. The orchestration system owns these values; strategies and
//! acceptors only borrow them.
//!
//! # Example
//!
//! ```
//! use rollout_model::ReplicationController;
//!
//! let rc = ReplicationController::new("frontend", 2)
//!     .with_namespace("web")
//!     .with_replicas(3);
//!
//! assert_eq!(rc.qualified_name(), "web/frontend-2");
//! assert_eq!(rc.replicas(), 3);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod controller;

pub use controller::{ObjectMeta, ReplicaStatus, ReplicationController, DEFAULT_NAMESPACE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
