//! Agent ROI projection engine
//!
//! This crate projects the economic value of deploying an automated agent
//! over time and converts the projection into standard investment metrics.
//! It supports:
//! - Five monthly value dimensions (labour arbitrage, throughput, decision
//!   quality, latency, optionality)
//! - Risk-adjusted valuation from a weighted four-category risk profile
//! - A staged adoption ramp (Pilot / Proven / Scaled / Optimized)
//! - NPV, IRR (Newton-Raphson), and interpolated payback period
//! - Seeded Monte Carlo simulation with p10/p50/p90 outcome distributions
//! - One-at-a-time sensitivity sweeps and tornado-chart data
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic project setup:
//!
//! ```ignore
//! use aura_core::config::{ProjectBuilder, TaskBuilder};
//! use aura_core::projection::evaluate;
//!
//! let project = ProjectBuilder::new("Customer Service Agent")
//!     .duration_months(24)
//!     .task(TaskBuilder::new("Email Response", 40.0, 35.0).accuracy(0.92))
//!     .initial_development(50_000.0)
//!     .platform_monthly(2_000.0)
//!     .build()?;
//!
//! let results = evaluate(&project)?;
//! println!("ROI: {:.1}%", results.roi_percentage);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod metrics;
pub mod projection;
pub mod simulation;
pub mod stats;
pub mod value;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ProjectBuilder, TaskBuilder};
pub use error::{ProjectError, SimulationError};
pub use model::{FullResults, MonteCarloSummary, MonthlyProjection, Project};
pub use projection::evaluate;
pub use simulation::{MonteCarloConfig, monte_carlo_simulate};
