//! Replication controller record
//!
//! Provides [`ReplicationController`], a named and versioned group of
//! identical replicas with a declared desired replica count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Namespace used when none is set
pub const DEFAULT_NAMESPACE: &str = "default";

/// Identifying metadata of a controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Deployment config name the controller belongs to
    pub name: String,

    /// Owning namespace
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Free-form annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Observed replica counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicaStatus {
    /// Replicas currently running
    #[serde(default)]
    pub replicas: u32,

    /// Replicas reporting ready
    #[serde(default)]
    pub ready_replicas: u32,
}

/// A replicated process group
///
/// Each deployment of a config produces a new controller with a higher
/// `version`. A rollout moves replicas from the previous controller to the
/// new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationController {
    /// Identifying metadata
    pub metadata: ObjectMeta,

    /// Deployment version this controller was created for
    pub version: u64,

    /// Desired replica count
    #[serde(default)]
    pub replicas: u32,

    /// Last observed status
    #[serde(default)]
    pub status: ReplicaStatus,
}

impl ReplicationController {
    /// Create controller for a config name and version with zero replicas
    #[must_use]
    pub fn new(name: impl Into<String>, version: u64) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                namespace: default_namespace(),
                annotations: BTreeMap::new(),
            },
            version,
            replicas: 0,
            status: ReplicaStatus::default(),
        }
    }

    /// Set namespace
    #[inline]
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = namespace.into();
        self
    }

    /// Set desired replicas
    #[inline]
    #[must_use]
    pub fn with_replicas(mut self, replicas: u32) -> Self {
        self.replicas = replicas;
        self
    }

    /// Set observed status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, replicas: u32, ready_replicas: u32) -> Self {
        self.status = ReplicaStatus {
            replicas,
            ready_replicas,
        };
        self
    }

    /// Add annotation
    #[inline]
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.annotations.insert(key.into(), value.into());
        self
    }

    /// Config name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Namespace
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    /// Desired replicas
    #[inline]
    #[must_use]
    pub fn replicas(&self) -> u32 {
        self.replicas
    }

    /// Ready replicas from the last observed status
    #[inline]
    #[must_use]
    pub fn ready_replicas(&self) -> u32 {
        self.status.ready_replicas
    }

    /// Look up an annotation
    #[inline]
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }

    /// Controller name as `<name>-<version>`
    #[must_use]
    pub fn controller_name(&self) -> String {
        format!("{}-{}", self.metadata.name, self.version)
    }

    /// Namespaced controller name as `<namespace>/<name>-<version>`
    #[must_use]
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl Display for ReplicationController {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}-{}",
            self.metadata.namespace, self.metadata.name, self.version
        )
    }
}
