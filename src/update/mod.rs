//! Update detection logic
//!
//! This module provides:
//! - The update evaluator comparing declared and upstream versions
//! - Throttling policies spacing successive resolutions

mod evaluator;
mod throttle;

pub use evaluator::evaluate;
pub use throttle::{throttle_for, FixedDelay, NoDelay, Throttle};
