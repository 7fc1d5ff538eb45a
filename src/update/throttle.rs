//! Spacing between successive package resolutions
//!
//! The default policy is a fixed pause after every resolved package, which
//! keeps anonymous API usage below provider rate limits.

use async_trait::async_trait;
use std::time::Duration;

/// Pause policy applied by the scan loop after each package
#[async_trait]
pub trait Throttle: Send {
    async fn pause(&mut self);
}

/// Sleep for a fixed interval after every package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl Throttle for FixedDelay {
    async fn pause(&mut self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// No pause at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Throttle for NoDelay {
    async fn pause(&mut self) {}
}

/// Build the policy for a configured interval
pub fn throttle_for(interval: Duration) -> Box<dyn Throttle> {
    if interval.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay::new(interval))
    }
}
