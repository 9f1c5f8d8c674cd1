//! Kinetype Common Utilities
//!
//! Shared infrastructure for all Kinetype crates:
//! - The sample-admission gate for throttled event streams
//! - Tracing/logging initialization

pub mod clock;
pub mod logging;

pub use clock::*;
pub use logging::*;
