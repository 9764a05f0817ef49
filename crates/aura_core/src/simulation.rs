//! Monte Carlo simulation over perturbed project inputs
//!
//! Each iteration perturbs an independent clone of the project, reruns the
//! projection + metrics pipeline, and records the outcome. Iterations run in
//! seeded batches so the whole run is reproducible for a given seed and can
//! execute in parallel without cross-iteration interference; percentile
//! aggregation happens strictly after the full batch completes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::SimulationError;
use crate::metrics;
use crate::model::{
    DistributionSummary, MonteCarloSummary, OutcomeSample, PaybackSummary, Project,
};
use crate::projection;
use crate::stats::{self, standard};

/// Iterations per seeded batch
const MAX_BATCH_SIZE: usize = 100;

/// Configuration for a Monte Carlo run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    pub iterations: usize,
    /// Base seed; batch b uses `seed + b`
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: 42,
        }
    }
}

impl MonteCarloConfig {
    /// Config with a custom iteration count and the default seed
    #[must_use]
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

/// Shared progress and cancellation handle for a Monte Carlo run.
///
/// Cancellation is best-effort and checked between iterations; a cancelled
/// run returns `SimulationError::Cancelled` and discards the partial batch.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloProgress {
    completed: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl MonteCarloProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from existing atomics (for frontend integration)
    #[must_use]
    pub fn from_atomics(completed: Arc<AtomicUsize>, cancelled: Arc<AtomicBool>) -> Self {
        Self {
            completed,
            cancelled,
        }
    }

    /// Number of iterations completed so far
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Request cancellation of the run
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }
}

/// Uniform perturbation distributions, constructed once per run
pub(crate) struct Perturbation {
    accuracy: Uniform<f64>,
    cost: Uniform<f64>,
    risk: Uniform<f64>,
}

impl Perturbation {
    pub(crate) fn new() -> Result<Self, SimulationError> {
        Ok(Self {
            accuracy: uniform(0.9, 1.1)?,
            cost: uniform(0.8, 1.2)?,
            risk: uniform(0.7, 1.3)?,
        })
    }
}

fn uniform(low: f64, high: f64) -> Result<Uniform<f64>, SimulationError> {
    Uniform::new_inclusive(low, high)
        .map_err(|_| SimulationError::InvalidDistribution { low, high })
}

/// Perturb an independent clone of the project: accuracy scaled and clamped
/// to [0.5, 1.0], development and platform costs scaled, each risk scalar
/// scaled and clamped to [0, 1].
pub(crate) fn perturb(project: &Project, dists: &Perturbation, rng: &mut SmallRng) -> Project {
    let mut trial = project.clone();

    for task in &mut trial.tasks {
        task.accuracy = (task.accuracy * dists.accuracy.sample(rng)).clamp(0.5, 1.0);
    }

    trial.costs.initial_development *= dists.cost.sample(rng);
    trial.costs.platform_monthly *= dists.cost.sample(rng);

    trial.risks.technical = (trial.risks.technical * dists.risk.sample(rng)).clamp(0.0, 1.0);
    trial.risks.adoption = (trial.risks.adoption * dists.risk.sample(rng)).clamp(0.0, 1.0);
    trial.risks.regulatory = (trial.risks.regulatory * dists.risk.sample(rng)).clamp(0.0, 1.0);
    trial.risks.vendor = (trial.risks.vendor * dists.risk.sample(rng)).clamp(0.0, 1.0);

    trial
}

fn run_iteration(project: &Project, dists: &Perturbation, rng: &mut SmallRng) -> OutcomeSample {
    let trial = perturb(project, dists, rng);
    let projections = projection::monthly_projections(&trial);
    metrics::outcome(&projections, trial.discount_rate)
}

/// Run a Monte Carlo simulation with no progress reporting
pub fn monte_carlo_simulate(
    project: &Project,
    config: &MonteCarloConfig,
) -> Result<MonteCarloSummary, SimulationError> {
    monte_carlo_simulate_with_progress(project, config, &MonteCarloProgress::new())
}

/// Run a Monte Carlo simulation, incrementing `progress` per iteration and
/// honoring cancellation between iterations.
pub fn monte_carlo_simulate_with_progress(
    project: &Project,
    config: &MonteCarloConfig,
    progress: &MonteCarloProgress,
) -> Result<MonteCarloSummary, SimulationError> {
    project.validate()?;
    let dists = Perturbation::new()?;

    let num_batches = config.iterations.div_ceil(MAX_BATCH_SIZE);
    let run_batch = |batch: usize| -> Result<Vec<OutcomeSample>, SimulationError> {
        let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            config.iterations - batch * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        let mut samples = Vec::with_capacity(batch_size);
        for _ in 0..batch_size {
            if progress.is_cancelled() {
                return Err(SimulationError::Cancelled);
            }
            samples.push(run_iteration(project, &dists, &mut rng));
            progress.increment();
        }
        Ok(samples)
    };

    #[cfg(feature = "parallel")]
    let batches: Vec<Vec<OutcomeSample>> = (0..num_batches)
        .into_par_iter()
        .map(run_batch)
        .collect::<Result<_, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let batches: Vec<Vec<OutcomeSample>> = (0..num_batches)
        .map(run_batch)
        .collect::<Result<_, _>>()?;

    let samples: Vec<OutcomeSample> = batches.into_iter().flatten().collect();
    Ok(aggregate(samples))
}

/// Sort and summarize the full sample set. Runs only after every iteration
/// has completed.
fn aggregate(samples: Vec<OutcomeSample>) -> MonteCarloSummary {
    let mut rois: Vec<f64> = samples.iter().map(|s| s.roi).collect();
    let mut npvs: Vec<f64> = samples.iter().map(|s| s.npv).collect();
    let mut paybacks: Vec<f64> = samples.iter().filter_map(|s| s.payback).collect();

    rois.sort_by(|a, b| a.total_cmp(b));
    npvs.sort_by(|a, b| a.total_cmp(b));
    paybacks.sort_by(|a, b| a.total_cmp(b));

    let payback = PaybackSummary {
        mean: (!paybacks.is_empty()).then(|| stats::mean(&paybacks)),
        p10: stats::percentile_nearest_rank(&paybacks, standard::P10),
        p50: stats::percentile_nearest_rank(&paybacks, standard::P50),
        p90: stats::percentile_nearest_rank(&paybacks, standard::P90),
    };

    MonteCarloSummary {
        iterations: samples.len(),
        roi: summarize(&rois),
        npv: summarize(&npvs),
        payback,
        samples,
    }
}

fn summarize(sorted: &[f64]) -> DistributionSummary {
    DistributionSummary {
        mean: stats::mean(sorted),
        p10: stats::percentile_nearest_rank(sorted, standard::P10).unwrap_or(0.0),
        p50: stats::percentile_nearest_rank(sorted, standard::P50).unwrap_or(0.0),
        p90: stats::percentile_nearest_rank(sorted, standard::P90).unwrap_or(0.0),
    }
}
