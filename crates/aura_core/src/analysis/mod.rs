//! One-at-a-time sensitivity analysis.
//!
//! Varies a single named parameter across a multiplier grid, rerunning the
//! projection + metrics pipeline on a fresh copy of the project at each
//! point, and feeds tornado charts from the per-parameter outcome ranges.
//!
//! ```ignore
//! use aura_core::analysis::{DEFAULT_VARIATIONS, SensitivityParameter, run_sensitivity_analysis};
//!
//! let points = run_sensitivity_analysis(
//!     &project,
//!     SensitivityParameter::Accuracy,
//!     &DEFAULT_VARIATIONS,
//! )?;
//! ```

mod config;
mod evaluator;

pub use config::{DEFAULT_VARIATIONS, Scenario, SensitivityParameter};
pub use evaluator::{
    SensitivityPoint, TornadoRow, run_scenarios, run_sensitivity_analysis, tornado_analysis,
};
