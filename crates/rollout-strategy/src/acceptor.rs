//! Acceptor composition
//!
//! Provides [`AcceptAll`] and [`AcceptorChain`] for combining
//! [`UpdateAcceptor`] checks.

use crate::error::StrategyError;
use crate::strategy::UpdateAcceptor;
use rollout_model::ReplicationController;
use std::fmt;

/// Acceptor that never rejects
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl UpdateAcceptor for AcceptAll {
    #[inline]
    fn accept(&self, _controller: &ReplicationController) -> Result<(), StrategyError> {
        Ok(())
    }
}

/// Ordered list of acceptors
///
/// Runs each acceptor in registration order and returns the first error
/// unchanged. An empty chain accepts everything.
#[derive(Default)]
pub struct AcceptorChain {
    acceptors: Vec<Box<dyn UpdateAcceptor>>,
}

impl AcceptorChain {
    /// Create empty chain
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append acceptor, builder style
    #[inline]
    #[must_use]
    pub fn with(mut self, acceptor: impl UpdateAcceptor + 'static) -> Self {
        self.push(acceptor);
        self
    }

    /// Append acceptor
    #[inline]
    pub fn push(&mut self, acceptor: impl UpdateAcceptor + 'static) {
        self.acceptors.push(Box::new(acceptor));
    }

    /// Number of acceptors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.acceptors.len()
    }

    /// Check if chain is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acceptors.is_empty()
    }
}

impl UpdateAcceptor for AcceptorChain {
    fn accept(&self, controller: &ReplicationController) -> Result<(), StrategyError> {
        for (position, acceptor) in self.acceptors.iter().enumerate() {
            if let Err(error) = acceptor.accept(controller) {
                tracing::warn!(
                    controller = %controller,
                    position,
                    %error,
                    "acceptor rejected controller"
                );
                return Err(error);
            }
        }

        tracing::debug!(
            controller = %controller,
            replicas = controller.replicas(),
            checks = self.acceptors.len(),
            "controller accepted"
        );
        Ok(())
    }
}

impl fmt::Debug for AcceptorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptorChain")
            .field("len", &self.acceptors.len())
            .finish()
    }
}
