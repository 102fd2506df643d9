//! Submission backends.
//!
//! The validator hands a validated [`FormValues`] to a [`Submitter`]. The
//! default [`SimulatedSubmitter`] just waits on a [`Clock`]; a real endpoint
//! would implement the same trait.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SendError;
use crate::values::FormValues;

/// Source of delays.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by `tokio::time`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Delivers a validated form.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, values: &FormValues) -> Result<(), SendError>;
}

/// Pretends to send the form by waiting a fixed latency.
#[derive(Clone)]
pub struct SimulatedSubmitter {
    clock: Arc<dyn Clock>,
    latency: Duration,
}

impl SimulatedSubmitter {
    /// Simulated submitter on the tokio clock.
    pub fn new(latency: Duration) -> Self {
        Self::with_clock(TokioClock, latency)
    }

    pub fn with_clock(clock: impl Clock + 'static, latency: Duration) -> Self {
        Self {
            clock: Arc::new(clock),
            latency,
        }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, values: &FormValues) -> Result<(), SendError> {
        log::debug!(
            "simulating submission for '{}' ({:?})",
            values.email,
            self.latency
        );
        self.clock.sleep(self.latency).await;
        Ok(())
    }
}

impl std::fmt::Debug for SimulatedSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedSubmitter")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
