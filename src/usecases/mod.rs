//! Use Cases Layer - Application Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `price_curve`: Single-share price series across volume
//! - `sampling`: Seedable random start points
//! - `chart_runner`: Batch driver over configured chart jobs

pub mod chart_runner;
pub mod price_curve;
pub mod sampling;
