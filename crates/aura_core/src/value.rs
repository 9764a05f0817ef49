//! The five monthly value dimensions
//!
//! Each function is a pure computation over static project inputs; missing
//! or disabled configuration contributes zero rather than failing. Only the
//! maturity multiplier varies by month, so the engine computes these once
//! per calculation.

use crate::model::{
    LatencyConfig, OptionalityConfig, Project, Task, ThroughputConfig, ValueBreakdown,
};

/// Average weeks per month used to convert weekly figures
pub const WEEKS_PER_MONTH: f64 = 4.33;
/// Months per year used to spread annual optionality value
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Direct labour arbitrage: hours displaced, discounted by accuracy and the
/// residual human-oversight share
#[must_use]
pub fn direct_labour_arbitrage(tasks: &[Task]) -> f64 {
    tasks
        .iter()
        .map(|task| {
            let monthly_hours = task.hours_per_week * WEEKS_PER_MONTH;
            monthly_hours * task.hourly_rate * task.accuracy * (1.0 - task.oversight_rate)
        })
        .sum()
}

/// Throughput amplification: value of added capacity actually used
#[must_use]
pub fn throughput_amplification(config: Option<&ThroughputConfig>) -> f64 {
    let Some(config) = config else {
        return 0.0;
    };
    let capacity_increase = config.new_capacity - config.old_capacity;
    if capacity_increase <= 0.0 {
        return 0.0;
    }
    capacity_increase * config.value_per_unit * config.utilization_rate
}

/// Decision quality premium: errors avoided relative to the human baseline.
///
/// Decisions per month come from `volume_per_week`, or are estimated from
/// hours and per-task minutes when volume is absent. An agent error rate at
/// or above the baseline contributes zero, never a negative value.
#[must_use]
pub fn decision_quality_premium(tasks: &[Task]) -> f64 {
    tasks
        .iter()
        .filter_map(|task| {
            let error_cost = task.error_cost?;
            let baseline_error_rate = task.baseline_error_rate?;

            let decisions_per_month = match (task.volume_per_week, task.time_per_task_minutes) {
                (Some(volume), _) => volume * WEEKS_PER_MONTH,
                (None, Some(minutes)) if minutes > 0.0 => {
                    task.hours_per_week * 60.0 / minutes * WEEKS_PER_MONTH
                }
                _ => return None,
            };

            let agent_error_rate = 1.0 - task.accuracy;
            let error_reduction = (baseline_error_rate - agent_error_rate).max(0.0);
            Some(decisions_per_month * error_reduction * error_cost)
        })
        .sum()
}

/// Latency value: what faster turnaround is worth across affected transactions
#[must_use]
pub fn latency_value(config: Option<&LatencyConfig>) -> f64 {
    let Some(config) = config else {
        return 0.0;
    };
    let time_saved = config.old_time_hours - config.new_time_hours;
    if time_saved <= 0.0 {
        return 0.0;
    }
    config.transactions_per_month
        * time_saved
        * config.value_per_hour_saved
        * config.time_sensitivity_factor
}

/// Optionality and learning value: annual strategic value spread across
/// months and weighted by realization probability
#[must_use]
pub fn optionality_value(config: Option<&OptionalityConfig>) -> f64 {
    let Some(config) = config else {
        return 0.0;
    };
    let annual_value =
        config.process_insights_value + config.data_asset_value + config.capability_options_value;
    annual_value / MONTHS_PER_YEAR * config.probability_factor
}

/// Base monthly value for each dimension, before maturity scaling
#[must_use]
pub fn value_breakdown(project: &Project) -> ValueBreakdown {
    ValueBreakdown {
        dla: direct_labour_arbitrage(&project.tasks),
        ta: throughput_amplification(project.throughput.as_ref()),
        dqp: decision_quality_premium(&project.tasks),
        lv: latency_value(project.latency.as_ref()),
        olv: optionality_value(project.optionality.as_ref()),
    }
}
