//! Project input model
//!
//! Everything the engine needs to evaluate an agent deployment: the tasks it
//! absorbs, the cost structure, the risk profile, the maturity ramp, and the
//! optional throughput/latency/optionality configurations. All types are
//! plain serde records; the engine never mutates them (stochastic wrappers
//! operate on clones).

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;

/// A task the agent takes over. The fundamental unit of work for the
/// labour-arbitrage dimension; the optional fields feed the decision-quality
/// dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    /// Hours currently spent on this task per week
    pub hours_per_week: f64,
    /// Loaded hourly cost (salary + benefits + overhead)
    pub hourly_rate: f64,
    /// Agent accuracy rate, 0.0 to 1.0
    #[serde(default = "default_accuracy")]
    pub accuracy: f64,
    /// Share of completions requiring human review, 0.0 to 1.0
    #[serde(default = "default_oversight_rate")]
    pub oversight_rate: f64,
    /// Task instances per week (decision-quality volume)
    #[serde(default)]
    pub volume_per_week: Option<f64>,
    /// Minutes per task instance; used to estimate volume when
    /// `volume_per_week` is absent
    #[serde(default)]
    pub time_per_task_minutes: Option<f64>,
    /// Cost of one incorrectly handled instance
    #[serde(default)]
    pub error_cost: Option<f64>,
    /// Human error rate without the agent
    #[serde(default)]
    pub baseline_error_rate: Option<f64>,
}

fn default_accuracy() -> f64 {
    0.90
}

fn default_oversight_rate() -> f64 {
    0.10
}

impl Task {
    /// Create a task with the default accuracy and oversight rates
    #[must_use]
    pub fn new(name: impl Into<String>, hours_per_week: f64, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            hours_per_week,
            hourly_rate,
            accuracy: default_accuracy(),
            oversight_rate: default_oversight_rate(),
            volume_per_week: None,
            time_per_task_minutes: None,
            error_cost: None,
            baseline_error_rate: None,
        }
    }
}

/// Throughput amplification inputs. Present on a project only when the
/// deployment raises capacity; absent means a zero contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputConfig {
    /// Capacity before the agent (units per period)
    pub old_capacity: f64,
    /// Capacity with the agent
    pub new_capacity: f64,
    /// Economic value per unit processed
    pub value_per_unit: f64,
    /// Expected utilization of the added capacity, 0.0 to 1.0
    #[serde(default = "default_utilization_rate")]
    pub utilization_rate: f64,
}

fn default_utilization_rate() -> f64 {
    0.85
}

/// Latency value inputs: what faster turnaround is worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub transactions_per_month: f64,
    pub old_time_hours: f64,
    pub new_time_hours: f64,
    pub value_per_hour_saved: f64,
    /// Multiplier for time-critical processes
    #[serde(default = "default_sensitivity_factor")]
    pub time_sensitivity_factor: f64,
}

fn default_sensitivity_factor() -> f64 {
    1.0
}

/// Optionality and learning value inputs. The three value fields are annual;
/// the engine spreads them across months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalityConfig {
    #[serde(default)]
    pub process_insights_value: f64,
    #[serde(default)]
    pub data_asset_value: f64,
    #[serde(default)]
    pub capability_options_value: f64,
    /// Likelihood of realizing the optionality value, 0.0 to 1.0
    #[serde(default = "default_probability_factor")]
    pub probability_factor: f64,
}

fn default_probability_factor() -> f64 {
    0.5
}

/// Complete cost structure: one-time fields plus monthly recurring fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostStructure {
    #[serde(default)]
    pub initial_development: f64,
    #[serde(default)]
    pub platform_monthly: f64,
    #[serde(default)]
    pub api_cost_per_call: f64,
    #[serde(default)]
    pub estimated_calls_per_month: f64,
    #[serde(default)]
    pub maintenance_monthly: f64,
    #[serde(default)]
    pub training_initial: f64,
    #[serde(default)]
    pub training_ongoing_monthly: f64,
    #[serde(default)]
    pub change_management: f64,
}

impl CostStructure {
    /// Total one-time outlay (development + initial training + change management)
    #[must_use]
    pub fn total_initial(&self) -> f64 {
        self.initial_development + self.training_initial + self.change_management
    }

    /// Total monthly recurring cost, including usage-based API spend
    #[must_use]
    pub fn total_monthly(&self) -> f64 {
        self.platform_monthly
            + self.api_cost_per_call * self.estimated_calls_per_month
            + self.maintenance_monthly
            + self.training_ongoing_monthly
    }

    /// Total cost over a period of `months`
    #[must_use]
    pub fn total_over(&self, months: u32) -> f64 {
        self.total_initial() + self.total_monthly() * f64::from(months)
    }
}

/// Weight of technical risk in the composite score
pub const TECHNICAL_RISK_WEIGHT: f64 = 0.35;
/// Weight of adoption risk in the composite score
pub const ADOPTION_RISK_WEIGHT: f64 = 0.35;
/// Weight of regulatory risk in the composite score
pub const REGULATORY_RISK_WEIGHT: f64 = 0.15;
/// Weight of vendor risk in the composite score
pub const VENDOR_RISK_WEIGHT: f64 = 0.15;

/// Risk assessment for the deployment. Each category is a probability-like
/// scalar, expected in [0, 1]. Neither the inputs nor the derived factor are
/// clamped: an out-of-range input produces an out-of-range adjustment factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Model degradation, hallucinations, integration failures
    pub technical: f64,
    /// User resistance, training gaps, change management
    pub adoption: f64,
    /// Compliance changes, explainability requirements
    pub regulatory: f64,
    /// Platform changes, pricing shifts, API deprecation
    pub vendor: f64,
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self {
            technical: 0.10,
            adoption: 0.15,
            regulatory: 0.05,
            vendor: 0.05,
        }
    }
}

impl RiskProfile {
    /// Weighted composite risk score. The weights sum to 1; technical and
    /// adoption carry the bulk.
    #[must_use]
    pub fn composite_risk(&self) -> f64 {
        self.technical * TECHNICAL_RISK_WEIGHT
            + self.adoption * ADOPTION_RISK_WEIGHT
            + self.regulatory * REGULATORY_RISK_WEIGHT
            + self.vendor * VENDOR_RISK_WEIGHT
    }

    /// Multiplier applied to gross value: 1 − composite risk
    #[must_use]
    pub fn adjustment_factor(&self) -> f64 {
        1.0 - self.composite_risk()
    }
}

/// Adoption maturity stage of the deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityStage {
    Pilot,
    Proven,
    Scaled,
    Optimized,
}

impl MaturityStage {
    /// Display label for the stage
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MaturityStage::Pilot => "Pilot",
            MaturityStage::Proven => "Proven",
            MaturityStage::Scaled => "Scaled",
            MaturityStage::Optimized => "Optimized",
        }
    }
}

/// Hard cap on the optimized-stage multiplier
pub const OPTIMIZED_MULTIPLIER_CAP: f64 = 1.8;

/// Maturity ramp configuration. Stage boundaries are cumulative month
/// counts; the optimized stage is open-ended, compounding `learning_rate`
/// per month up to [`OPTIMIZED_MULTIPLIER_CAP`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityConfig {
    pub pilot_months: u32,
    pub proven_months: u32,
    pub scaled_months: u32,
    /// Monthly improvement rate once optimized
    pub learning_rate: f64,
    #[serde(default = "default_pilot_multiplier")]
    pub pilot_multiplier: f64,
    #[serde(default = "default_proven_multiplier")]
    pub proven_multiplier: f64,
    #[serde(default = "default_scaled_multiplier")]
    pub scaled_multiplier: f64,
    #[serde(default = "default_optimized_multiplier")]
    pub optimized_multiplier: f64,
}

fn default_pilot_multiplier() -> f64 {
    0.3
}

fn default_proven_multiplier() -> f64 {
    0.7
}

fn default_scaled_multiplier() -> f64 {
    1.0
}

fn default_optimized_multiplier() -> f64 {
    1.3
}

impl Default for MaturityConfig {
    fn default() -> Self {
        Self {
            pilot_months: 3,
            proven_months: 6,
            scaled_months: 9,
            learning_rate: 0.02,
            pilot_multiplier: default_pilot_multiplier(),
            proven_multiplier: default_proven_multiplier(),
            scaled_multiplier: default_scaled_multiplier(),
            optimized_multiplier: default_optimized_multiplier(),
        }
    }
}

impl MaturityConfig {
    /// Last month of the pilot stage
    #[must_use]
    pub fn pilot_end(&self) -> u32 {
        self.pilot_months
    }

    /// Last month of the proven stage
    #[must_use]
    pub fn proven_end(&self) -> u32 {
        self.pilot_months + self.proven_months
    }

    /// Last month of the scaled stage; the optimized stage begins after this
    #[must_use]
    pub fn scaled_end(&self) -> u32 {
        self.pilot_months + self.proven_months + self.scaled_months
    }

    /// Stage for a 1-indexed month
    #[must_use]
    pub fn stage_at(&self, month: u32) -> MaturityStage {
        if month <= self.pilot_end() {
            MaturityStage::Pilot
        } else if month <= self.proven_end() {
            MaturityStage::Proven
        } else if month <= self.scaled_end() {
            MaturityStage::Scaled
        } else {
            MaturityStage::Optimized
        }
    }

    /// Value multiplier for a 1-indexed month.
    ///
    /// In the optimized stage the multiplier compounds from the first
    /// optimized month (exponent 1, not 0) and is capped at
    /// [`OPTIMIZED_MULTIPLIER_CAP`], so it is non-decreasing in `month`.
    #[must_use]
    pub fn multiplier_at(&self, month: u32) -> f64 {
        match self.stage_at(month) {
            MaturityStage::Pilot => self.pilot_multiplier,
            MaturityStage::Proven => self.proven_multiplier,
            MaturityStage::Scaled => self.scaled_multiplier,
            MaturityStage::Optimized => {
                let months_optimized = month - self.scaled_end();
                let growth = (1.0 + self.learning_rate).powi(months_optimized as i32);
                (self.optimized_multiplier * growth).min(OPTIMIZED_MULTIPLIER_CAP)
            }
        }
    }
}

/// Complete project definition: the single input to every engine entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default = "default_duration_months")]
    pub duration_months: u32,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub costs: CostStructure,
    #[serde(default)]
    pub risks: RiskProfile,
    #[serde(default)]
    pub maturity: MaturityConfig,
    #[serde(default)]
    pub throughput: Option<ThroughputConfig>,
    #[serde(default)]
    pub latency: Option<LatencyConfig>,
    #[serde(default)]
    pub optionality: Option<OptionalityConfig>,
    /// Annual discount rate for NPV
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

fn default_duration_months() -> u32 {
    24
}

fn default_discount_rate() -> f64 {
    0.10
}

impl Project {
    /// Create an empty project with the default duration and discount rate
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration_months: default_duration_months(),
            tasks: Vec::new(),
            costs: CostStructure::default(),
            risks: RiskProfile::default(),
            maturity: MaturityConfig::default(),
            throughput: None,
            latency: None,
            optionality: None,
            discount_rate: default_discount_rate(),
        }
    }

    /// Basic numeric guards. Risk scalars are intentionally not checked;
    /// out-of-range risks flow through unclamped.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.name.is_empty() {
            return Err(ProjectError::MissingName);
        }
        if self.duration_months == 0 {
            return Err(ProjectError::ZeroDuration);
        }
        for task in &self.tasks {
            if task.hours_per_week < 0.0 {
                return Err(ProjectError::NegativeValue {
                    field: "hours_per_week",
                    value: task.hours_per_week,
                });
            }
            if task.hourly_rate < 0.0 {
                return Err(ProjectError::NegativeValue {
                    field: "hourly_rate",
                    value: task.hourly_rate,
                });
            }
            if !(0.0..=1.0).contains(&task.accuracy) {
                return Err(ProjectError::OutOfRange {
                    field: "accuracy",
                    value: task.accuracy,
                });
            }
            if !(0.0..=1.0).contains(&task.oversight_rate) {
                return Err(ProjectError::OutOfRange {
                    field: "oversight_rate",
                    value: task.oversight_rate,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_risk_is_weighted_sum() {
        let risks = RiskProfile {
            technical: 0.2,
            adoption: 0.3,
            regulatory: 0.1,
            vendor: 0.1,
        };

        // 0.07 + 0.105 + 0.015 + 0.015
        assert!((risks.composite_risk() - 0.205).abs() < 1e-12);
        assert!((risks.adjustment_factor() - 0.795).abs() < 1e-12);
    }

    #[test]
    fn risk_inputs_are_not_clamped() {
        let risks = RiskProfile {
            technical: 2.0,
            adoption: 2.0,
            regulatory: 2.0,
            vendor: 2.0,
        };

        assert!((risks.composite_risk() - 2.0).abs() < 1e-12);
        assert!(risks.adjustment_factor() < 0.0);
    }

    #[test]
    fn cost_totals() {
        let costs = CostStructure {
            initial_development: 50_000.0,
            training_initial: 5_000.0,
            change_management: 10_000.0,
            platform_monthly: 2_000.0,
            api_cost_per_call: 0.01,
            estimated_calls_per_month: 100_000.0,
            maintenance_monthly: 500.0,
            training_ongoing_monthly: 250.0,
        };

        assert!((costs.total_initial() - 65_000.0).abs() < 1e-9);
        assert!((costs.total_monthly() - 3_750.0).abs() < 1e-9);
        assert!((costs.total_over(12) - (65_000.0 + 12.0 * 3_750.0)).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_bad_input() {
        let mut project = Project::new("");
        assert_eq!(project.validate(), Err(ProjectError::MissingName));

        project.name = "Bot".to_string();
        project.duration_months = 0;
        assert_eq!(project.validate(), Err(ProjectError::ZeroDuration));

        project.duration_months = 12;
        project.tasks.push(Task {
            accuracy: 1.5,
            ..Task::new("Triage", 10.0, 50.0)
        });
        assert!(matches!(
            project.validate(),
            Err(ProjectError::OutOfRange {
                field: "accuracy",
                ..
            })
        ));
    }
}
