//! Project Builder
//!
//! Fluent API for assembling a [`Project`] without spelling out every record
//! literal. Validation runs once at `build()`.
//!
//! # Example
//!
//! ```ignore
//! use aura_core::config::{ProjectBuilder, TaskBuilder};
//!
//! let project = ProjectBuilder::new("Customer Service Agent")
//!     .duration_months(24)
//!     .discount_rate(0.10)
//!     .task(TaskBuilder::new("Email Response", 40.0, 35.0)
//!         .accuracy(0.92)
//!         .oversight_rate(0.15))
//!     .initial_development(50_000.0)
//!     .platform_monthly(2_000.0)
//!     .risks(0.15, 0.20, 0.10, 0.05)
//!     .maturity(3, 6, 9, 0.02)
//!     .build()?;
//! ```

use crate::error::ProjectError;
use crate::model::{
    LatencyConfig, MaturityConfig, OptionalityConfig, Project, RiskProfile, Task, ThroughputConfig,
};

/// Fluent builder for a single task
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    /// Start a task from its three required figures
    #[must_use]
    pub fn new(name: impl Into<String>, hours_per_week: f64, hourly_rate: f64) -> Self {
        Self {
            task: Task::new(name, hours_per_week, hourly_rate),
        }
    }

    #[must_use]
    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.task.accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn oversight_rate(mut self, oversight_rate: f64) -> Self {
        self.task.oversight_rate = oversight_rate;
        self
    }

    #[must_use]
    pub fn volume_per_week(mut self, volume: f64) -> Self {
        self.task.volume_per_week = Some(volume);
        self
    }

    #[must_use]
    pub fn time_per_task_minutes(mut self, minutes: f64) -> Self {
        self.task.time_per_task_minutes = Some(minutes);
        self
    }

    /// Enable the decision-quality contribution for this task
    #[must_use]
    pub fn error_profile(mut self, error_cost: f64, baseline_error_rate: f64) -> Self {
        self.task.error_cost = Some(error_cost);
        self.task.baseline_error_rate = Some(baseline_error_rate);
        self
    }

    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }
}

/// Fluent builder for a complete project
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            project: Project::new(name),
        }
    }

    // =========================================================================
    // Basic configuration
    // =========================================================================

    #[must_use]
    pub fn duration_months(mut self, months: u32) -> Self {
        self.project.duration_months = months;
        self
    }

    /// Annual discount rate for NPV
    #[must_use]
    pub fn discount_rate(mut self, rate: f64) -> Self {
        self.project.discount_rate = rate;
        self
    }

    #[must_use]
    pub fn task(mut self, task: TaskBuilder) -> Self {
        self.project.tasks.push(task.into_task());
        self
    }

    // =========================================================================
    // Costs
    // =========================================================================

    #[must_use]
    pub fn initial_development(mut self, cost: f64) -> Self {
        self.project.costs.initial_development = cost;
        self
    }

    #[must_use]
    pub fn platform_monthly(mut self, cost: f64) -> Self {
        self.project.costs.platform_monthly = cost;
        self
    }

    /// Usage-based API spend: per-call cost times estimated monthly calls
    #[must_use]
    pub fn api_usage(mut self, cost_per_call: f64, calls_per_month: f64) -> Self {
        self.project.costs.api_cost_per_call = cost_per_call;
        self.project.costs.estimated_calls_per_month = calls_per_month;
        self
    }

    #[must_use]
    pub fn maintenance_monthly(mut self, cost: f64) -> Self {
        self.project.costs.maintenance_monthly = cost;
        self
    }

    #[must_use]
    pub fn training(mut self, initial: f64, ongoing_monthly: f64) -> Self {
        self.project.costs.training_initial = initial;
        self.project.costs.training_ongoing_monthly = ongoing_monthly;
        self
    }

    #[must_use]
    pub fn change_management(mut self, cost: f64) -> Self {
        self.project.costs.change_management = cost;
        self
    }

    // =========================================================================
    // Risk and maturity
    // =========================================================================

    #[must_use]
    pub fn risks(mut self, technical: f64, adoption: f64, regulatory: f64, vendor: f64) -> Self {
        self.project.risks = RiskProfile {
            technical,
            adoption,
            regulatory,
            vendor,
        };
        self
    }

    /// Stage durations in months plus the optimized-stage learning rate
    #[must_use]
    pub fn maturity(mut self, pilot: u32, proven: u32, scaled: u32, learning_rate: f64) -> Self {
        self.project.maturity = MaturityConfig {
            pilot_months: pilot,
            proven_months: proven,
            scaled_months: scaled,
            learning_rate,
            ..MaturityConfig::default()
        };
        self
    }

    // =========================================================================
    // Optional value dimensions
    // =========================================================================

    #[must_use]
    pub fn throughput(mut self, config: ThroughputConfig) -> Self {
        self.project.throughput = Some(config);
        self
    }

    #[must_use]
    pub fn latency(mut self, config: LatencyConfig) -> Self {
        self.project.latency = Some(config);
        self
    }

    #[must_use]
    pub fn optionality(mut self, config: OptionalityConfig) -> Self {
        self.project.optionality = Some(config);
        self
    }

    /// Validate and return the finished project
    pub fn build(self) -> Result<Project, ProjectError> {
        self.project.validate()?;
        Ok(self.project)
    }
}
