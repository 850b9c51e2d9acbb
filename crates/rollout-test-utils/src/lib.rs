//! Testing utilities for the rollout workspace
//!
//! Shared fixtures and recording fakes for the strategy contracts.

#![allow(missing_docs)]

use parking_lot::Mutex;
use rollout_model::ReplicationController;
use rollout_strategy::{DeploymentStrategy, StrategyError, UpdateAcceptor};

pub fn create_controller(name: &str, version: u64, replicas: u32) -> ReplicationController {
    ReplicationController::new(name, version)
        .with_namespace("test")
        .with_replicas(replicas)
        .with_status(replicas, replicas)
}

pub fn create_unready_controller(
    name: &str,
    version: u64,
    replicas: u32,
    ready: u32,
) -> ReplicationController {
    create_controller(name, version, replicas).with_status(replicas, ready)
}

/// What a [`RecordingStrategy`] returns from `deploy`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeed,
    ConditionReached(String),
    Fail(String),
}

impl Outcome {
    fn to_result(&self) -> Result<(), StrategyError> {
        match self {
            Self::Succeed => Ok(()),
            Self::ConditionReached(msg) => Err(StrategyError::condition_reached(msg.clone())),
            Self::Fail(msg) => Err(StrategyError::Other(anyhow::anyhow!("{msg}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCall {
    pub from: Option<String>,
    pub to: String,
    pub desired_replicas: u32,
}

/// Strategy that records its calls and returns a fixed outcome
#[derive(Debug)]
pub struct RecordingStrategy {
    outcome: Outcome,
    calls: Mutex<Vec<DeployCall>>,
}

impl RecordingStrategy {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Outcome::Succeed)
    }

    pub fn calls(&self) -> Vec<DeployCall> {
        self.calls.lock().clone()
    }
}

impl DeploymentStrategy for RecordingStrategy {
    fn deploy(
        &self,
        from: Option<&ReplicationController>,
        to: &ReplicationController,
        desired_replicas: u32,
    ) -> Result<(), StrategyError> {
        self.calls.lock().push(DeployCall {
            from: from.map(ReplicationController::qualified_name),
            to: to.qualified_name(),
            desired_replicas,
        });
        self.outcome.to_result()
    }
}

/// Acceptor that records controllers and rejects those short of ready replicas
#[derive(Debug, Default)]
pub struct RecordingAcceptor {
    seen: Mutex<Vec<String>>,
}

impl RecordingAcceptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

impl UpdateAcceptor for RecordingAcceptor {
    fn accept(&self, controller: &ReplicationController) -> Result<(), StrategyError> {
        self.seen.lock().push(controller.qualified_name());
        if controller.ready_replicas() < controller.replicas() {
            return Err(StrategyError::rejected(
                controller.qualified_name(),
                format!(
                    "{} of {} replicas ready",
                    controller.ready_replicas(),
                    controller.replicas()
                ),
            ));
        }
        Ok(())
    }
}
