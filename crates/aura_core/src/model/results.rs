//! Engine output types
//!
//! Contains the monthly projection table, the aggregate results record, and
//! the Monte Carlo summary types.

use serde::{Deserialize, Serialize};

use super::project::MaturityStage;

/// Monthly value split across the five dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueBreakdown {
    /// Direct labour arbitrage
    pub dla: f64,
    /// Throughput amplification
    pub ta: f64,
    /// Decision quality premium
    pub dqp: f64,
    /// Latency value
    pub lv: f64,
    /// Optionality and learning value
    pub olv: f64,
}

impl ValueBreakdown {
    /// Total gross value across all dimensions
    #[must_use]
    pub fn total(&self) -> f64 {
        self.dla + self.ta + self.dqp + self.lv + self.olv
    }

    /// Breakdown with every dimension scaled by a maturity multiplier
    #[must_use]
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            dla: self.dla * multiplier,
            ta: self.ta * multiplier,
            dqp: self.dqp * multiplier,
            lv: self.lv * multiplier,
            olv: self.olv * multiplier,
        }
    }
}

/// Projection for a single month, immutable once appended to the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// Month number, 1-indexed
    pub month: u32,
    pub stage: MaturityStage,
    pub maturity_multiplier: f64,
    /// Value before risk adjustment
    pub gross_value: f64,
    /// Value after the risk adjustment factor
    pub risk_adjusted_value: f64,
    /// Cost for this month; month 1 carries the one-time outlay
    pub cost: f64,
    /// Risk-adjusted value minus cost
    pub net_value: f64,
    /// Running total of net value, seeded at the negative one-time outlay
    pub cumulative_net_value: f64,
    /// Per-dimension values at this month's multiplier
    pub breakdown: ValueBreakdown,
}

/// Complete results from evaluating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullResults {
    pub project_name: String,
    pub duration_months: u32,
    /// Base monthly value per dimension, before maturity scaling
    pub value_breakdown: ValueBreakdown,
    pub total_gross_value: f64,
    pub total_risk_adjusted_value: f64,
    pub total_cost: f64,
    pub net_present_value: f64,
    /// (total risk-adjusted − total cost) / total cost × 100
    pub roi_percentage: f64,
    /// Break-even month, possibly fractional; `None` if never reached
    pub payback_months: Option<f64>,
    /// Annualized internal rate of return as a percentage; `None` when no
    /// finite rate zeroes the cash-flow series
    pub irr: Option<f64>,
    pub composite_risk: f64,
    pub risk_adjustment_factor: f64,
    pub discount_rate: f64,
    pub monthly_projections: Vec<MonthlyProjection>,
}

impl FullResults {
    /// Total net value over the projection horizon
    #[must_use]
    pub fn total_net_value(&self) -> f64 {
        self.total_risk_adjusted_value - self.total_cost
    }

    /// Cumulative net value at the end of the horizon
    #[must_use]
    pub fn final_cumulative_net(&self) -> f64 {
        self.monthly_projections
            .last()
            .map_or(0.0, |p| p.cumulative_net_value)
    }

    /// Whether the projection reaches break-even within the horizon
    #[must_use]
    pub fn breaks_even(&self) -> bool {
        self.payback_months.is_some()
    }
}

/// Outcome of a single Monte Carlo iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSample {
    pub roi: f64,
    pub npv: f64,
    pub payback: Option<f64>,
}

/// Mean and nearest-rank percentiles of one outcome metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub mean: f64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// Payback statistics over the iterations that reached break-even. All
/// fields are `None` when no iteration paid back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaybackSummary {
    pub mean: Option<f64>,
    pub p10: Option<f64>,
    pub p50: Option<f64>,
    pub p90: Option<f64>,
}

/// Aggregated results of a Monte Carlo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    pub iterations: usize,
    pub roi: DistributionSummary,
    pub npv: DistributionSummary,
    pub payback: PaybackSummary,
    /// Raw per-iteration outcomes, in iteration order
    pub samples: Vec<OutcomeSample>,
}

impl MonteCarloSummary {
    /// Share of iterations with a positive NPV
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let positive = self.samples.iter().filter(|s| s.npv > 0.0).count();
        positive as f64 / self.samples.len() as f64
    }

    /// Share of iterations that reached break-even
    #[must_use]
    pub fn payback_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let finite = self.samples.iter().filter(|s| s.payback.is_some()).count();
        finite as f64 / self.samples.len() as f64
    }
}
