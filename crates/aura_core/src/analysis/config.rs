//! Configuration types for sensitivity and scenario analysis.

use serde::{Deserialize, Serialize};

use crate::model::Project;

/// Default one-at-a-time multiplier grid
pub const DEFAULT_VARIATIONS: [f64; 7] = [0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3];

/// A named parameter group that a sensitivity sweep can scale.
///
/// Probability-like groups (accuracy, risk) are capped at 1.0 after
/// scaling; rate and cost groups scale unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensitivityParameter {
    /// Every task's accuracy, capped at 1.0
    Accuracy,
    /// Every task's loaded hourly rate
    HourlyRate,
    /// Every task's weekly hours
    HoursPerWeek,
    /// Initial development, monthly platform, and monthly maintenance costs
    Cost,
    /// The annual discount rate
    DiscountRate,
    /// All four risk scalars, each capped at 1.0
    Risk,
}

impl SensitivityParameter {
    /// Display label for chart axes
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityParameter::Accuracy => "Accuracy",
            SensitivityParameter::HourlyRate => "Hourly Rate",
            SensitivityParameter::HoursPerWeek => "Hours per Week",
            SensitivityParameter::Cost => "Cost",
            SensitivityParameter::DiscountRate => "Discount Rate",
            SensitivityParameter::Risk => "Risk",
        }
    }

    /// Scale this parameter group on `project` by `multiplier`
    pub fn apply(&self, project: &mut Project, multiplier: f64) {
        match self {
            SensitivityParameter::Accuracy => {
                for task in &mut project.tasks {
                    task.accuracy = (task.accuracy * multiplier).min(1.0);
                }
            }
            SensitivityParameter::HourlyRate => {
                for task in &mut project.tasks {
                    task.hourly_rate *= multiplier;
                }
            }
            SensitivityParameter::HoursPerWeek => {
                for task in &mut project.tasks {
                    task.hours_per_week *= multiplier;
                }
            }
            SensitivityParameter::Cost => {
                project.costs.initial_development *= multiplier;
                project.costs.platform_monthly *= multiplier;
                project.costs.maintenance_monthly *= multiplier;
            }
            SensitivityParameter::DiscountRate => {
                project.discount_rate *= multiplier;
            }
            SensitivityParameter::Risk => {
                let risks = &mut project.risks;
                risks.technical = (risks.technical * multiplier).min(1.0);
                risks.adoption = (risks.adoption * multiplier).min(1.0);
                risks.regulatory = (risks.regulatory * multiplier).min(1.0);
                risks.vendor = (risks.vendor * multiplier).min(1.0);
            }
        }
    }
}

/// A named what-if scenario: a set of parameter modifications applied
/// together to one copy of the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub modifications: Vec<(SensitivityParameter, f64)>,
}

impl Scenario {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifications: Vec::new(),
        }
    }

    /// Add a (parameter, multiplier) modification
    #[must_use]
    pub fn with(mut self, parameter: SensitivityParameter, multiplier: f64) -> Self {
        self.modifications.push((parameter, multiplier));
        self
    }
}
