//! Tests for the five value dimensions
//!
//! Every dimension defaults missing or disabled input to a zero
//! contribution; none of them can go negative.

use crate::model::{LatencyConfig, OptionalityConfig, Task, ThroughputConfig};
use crate::value::{
    decision_quality_premium, direct_labour_arbitrage, latency_value, optionality_value,
    throughput_amplification, value_breakdown,
};

#[test]
fn dla_empty_task_list_is_zero() {
    assert_eq!(direct_labour_arbitrage(&[]), 0.0);
}

#[test]
fn dla_single_task() {
    let tasks = vec![Task {
        accuracy: 1.0,
        oversight_rate: 0.0,
        ..Task::new("Triage", 10.0, 100.0)
    }];

    // 10 h/wk * 4.33 wk/mo * $100/h
    assert!((direct_labour_arbitrage(&tasks) - 4_330.0).abs() < 1e-9);
}

#[test]
fn dla_discounts_accuracy_and_oversight() {
    let tasks = vec![Task {
        accuracy: 0.9,
        oversight_rate: 0.2,
        ..Task::new("Triage", 10.0, 100.0)
    }];

    let expected = 4_330.0 * 0.9 * 0.8;
    assert!((direct_labour_arbitrage(&tasks) - expected).abs() < 1e-9);
}

#[test]
fn ta_disabled_is_zero() {
    assert_eq!(throughput_amplification(None), 0.0);
}

#[test]
fn ta_requires_a_capacity_increase() {
    let config = ThroughputConfig {
        old_capacity: 150.0,
        new_capacity: 100.0,
        value_per_unit: 50.0,
        utilization_rate: 0.8,
    };
    assert_eq!(throughput_amplification(Some(&config)), 0.0);
}

#[test]
fn ta_values_added_capacity() {
    let config = ThroughputConfig {
        old_capacity: 100.0,
        new_capacity: 150.0,
        value_per_unit: 50.0,
        utilization_rate: 0.8,
    };

    // 50 units * $50 * 0.8
    assert!((throughput_amplification(Some(&config)) - 2_000.0).abs() < 1e-9);
}

#[test]
fn dqp_ignores_tasks_without_error_fields() {
    let tasks = vec![Task::new("Triage", 10.0, 100.0)];
    assert_eq!(decision_quality_premium(&tasks), 0.0);
}

#[test]
fn dqp_from_weekly_volume() {
    let tasks = vec![Task {
        accuracy: 0.95,
        volume_per_week: Some(100.0),
        error_cost: Some(50.0),
        baseline_error_rate: Some(0.10),
        ..Task::new("Claims", 10.0, 100.0)
    }];

    // 433 decisions/mo * (0.10 - 0.05) * $50
    assert!((decision_quality_premium(&tasks) - 1_082.5).abs() < 1e-9);
}

#[test]
fn dqp_estimates_volume_from_task_time() {
    let tasks = vec![Task {
        accuracy: 0.95,
        time_per_task_minutes: Some(15.0),
        error_cost: Some(50.0),
        baseline_error_rate: Some(0.10),
        ..Task::new("Claims", 10.0, 100.0)
    }];

    // 10 h/wk * 60 / 15 min = 40/wk -> 173.2 decisions/mo
    let expected = 173.2 * 0.05 * 50.0;
    assert!((decision_quality_premium(&tasks) - expected).abs() < 1e-9);
}

#[test]
fn dqp_never_negative_when_agent_underperforms() {
    let tasks = vec![Task {
        accuracy: 0.80, // agent error rate 0.20, above the 0.10 baseline
        volume_per_week: Some(100.0),
        error_cost: Some(50.0),
        baseline_error_rate: Some(0.10),
        ..Task::new("Claims", 10.0, 100.0)
    }];

    assert_eq!(decision_quality_premium(&tasks), 0.0);
}

#[test]
fn lv_disabled_or_slower_is_zero() {
    assert_eq!(latency_value(None), 0.0);

    let slower = LatencyConfig {
        transactions_per_month: 1_000.0,
        old_time_hours: 0.5,
        new_time_hours: 2.0,
        value_per_hour_saved: 20.0,
        time_sensitivity_factor: 1.0,
    };
    assert_eq!(latency_value(Some(&slower)), 0.0);
}

#[test]
fn lv_values_time_saved() {
    let config = LatencyConfig {
        transactions_per_month: 1_000.0,
        old_time_hours: 2.0,
        new_time_hours: 0.5,
        value_per_hour_saved: 20.0,
        time_sensitivity_factor: 1.5,
    };

    // 1000 * 1.5 h * $20 * 1.5
    assert!((latency_value(Some(&config)) - 45_000.0).abs() < 1e-9);
}

#[test]
fn olv_spreads_annual_value() {
    assert_eq!(optionality_value(None), 0.0);

    let config = OptionalityConfig {
        process_insights_value: 12_000.0,
        data_asset_value: 6_000.0,
        capability_options_value: 6_000.0,
        probability_factor: 0.5,
    };

    // 24000 / 12 * 0.5
    assert!((optionality_value(Some(&config)) - 1_000.0).abs() < 1e-9);
}

#[test]
fn breakdown_totals_all_dimensions() {
    let project = super::sample_project();
    let breakdown = value_breakdown(&project);

    // Only DLA is configured: 40 * 4.33 * 50 * 0.9 * 0.9
    assert!((breakdown.dla - 7_014.6).abs() < 1e-9);
    assert_eq!(breakdown.ta, 0.0);
    assert_eq!(breakdown.dqp, 0.0);
    assert_eq!(breakdown.lv, 0.0);
    assert_eq!(breakdown.olv, 0.0);
    assert!((breakdown.total() - breakdown.dla).abs() < 1e-12);
}
