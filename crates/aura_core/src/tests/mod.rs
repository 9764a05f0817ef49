//! Integration tests for the aura_core engine
//!
//! Tests are organized by topic:
//! - `value` - the five monthly value dimensions
//! - `maturity` - stage machine and multiplier ramp
//! - `projection` - monthly table, cumulative seeding, full results
//! - `metrics` - NPV, payback, and IRR solvers
//! - `simulation` - Monte Carlo distributions, determinism, cancellation
//! - `analysis` - sensitivity sweeps, tornado rows, scenarios
//! - `builder_dsl` - fluent project construction

mod analysis;
mod value;

use crate::model::{CostStructure, MaturityConfig, Project, RiskProfile, Task};

/// A deployment that reaches break-even well inside its horizon: one
/// full-time task, $30k one-time outlay, small recurring costs.
pub fn sample_project() -> Project {
    Project {
        duration_months: 24,
        tasks: vec![Task {
            accuracy: 0.90,
            oversight_rate: 0.10,
            ..Task::new("Email Response", 40.0, 50.0)
        }],
        costs: CostStructure {
            initial_development: 30_000.0,
            platform_monthly: 500.0,
            maintenance_monthly: 200.0,
            ..CostStructure::default()
        },
        risks: RiskProfile {
            technical: 0.10,
            adoption: 0.15,
            regulatory: 0.05,
            vendor: 0.05,
        },
        maturity: MaturityConfig {
            pilot_months: 3,
            proven_months: 6,
            scaled_months: 6,
            learning_rate: 0.02,
            ..MaturityConfig::default()
        },
        ..Project::new("Customer Service Agent")
    }
}
