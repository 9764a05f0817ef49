//! Tests for sensitivity sweeps, tornado rows, and what-if scenarios

use crate::analysis::{
    DEFAULT_VARIATIONS, Scenario, SensitivityParameter, run_scenarios, run_sensitivity_analysis,
    tornado_analysis,
};

use super::sample_project;

#[test]
fn points_follow_the_input_order() {
    let project = sample_project();
    let points =
        run_sensitivity_analysis(&project, SensitivityParameter::Accuracy, &[0.8, 1.0, 1.2])
            .unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].multiplier, 0.8);
    assert_eq!(points[1].multiplier, 1.0);
    assert_eq!(points[2].multiplier, 1.2);
}

#[test]
fn unsorted_grids_are_not_reordered() {
    let project = sample_project();
    let points =
        run_sensitivity_analysis(&project, SensitivityParameter::Cost, &[1.3, 0.7, 1.0]).unwrap();

    let multipliers: Vec<f64> = points.iter().map(|p| p.multiplier).collect();
    assert_eq!(multipliers, vec![1.3, 0.7, 1.0]);
}

#[test]
fn roi_is_monotonic_in_accuracy() {
    let project = sample_project();
    let points =
        run_sensitivity_analysis(&project, SensitivityParameter::Accuracy, &[0.8, 1.0, 1.2])
            .unwrap();

    assert!(points[0].roi <= points[1].roi);
    assert!(points[1].roi <= points[2].roi);
}

#[test]
fn roi_falls_as_costs_rise() {
    let project = sample_project();
    let points = run_sensitivity_analysis(&project, SensitivityParameter::Cost, &DEFAULT_VARIATIONS)
        .unwrap();

    for pair in points.windows(2) {
        assert!(pair[0].roi >= pair[1].roi);
    }
}

#[test]
fn accuracy_multiplier_is_capped_at_one() {
    let project = sample_project(); // accuracy 0.90

    // At x1.2 the capped accuracy (1.0) beats x1.0 (0.90); x1.3 changes
    // nothing beyond the cap.
    let points = run_sensitivity_analysis(
        &project,
        SensitivityParameter::Accuracy,
        &[1.0, 1.2, 1.3],
    )
    .unwrap();

    assert!(points[1].roi > points[0].roi);
    assert!((points[2].roi - points[1].roi).abs() < 1e-9);
}

#[test]
fn the_unit_multiplier_matches_the_base_evaluation() {
    let project = sample_project();
    let base = crate::projection::evaluate(&project).unwrap();

    for parameter in [
        SensitivityParameter::Accuracy,
        SensitivityParameter::HourlyRate,
        SensitivityParameter::Cost,
        SensitivityParameter::Risk,
    ] {
        let points = run_sensitivity_analysis(&project, parameter, &[1.0]).unwrap();
        assert!((points[0].roi - base.roi_percentage).abs() < 1e-9);
        assert!((points[0].npv - base.net_present_value).abs() < 1e-9);
    }
}

#[test]
fn tornado_rows_are_sorted_by_swing() {
    let project = sample_project();
    let rows = tornado_analysis(
        &project,
        &[
            SensitivityParameter::Accuracy,
            SensitivityParameter::HourlyRate,
            SensitivityParameter::Cost,
            SensitivityParameter::Risk,
        ],
        &DEFAULT_VARIATIONS,
    )
    .unwrap();

    assert_eq!(rows.len(), 4);
    for pair in rows.windows(2) {
        assert!(pair[0].swing >= pair[1].swing);
    }

    // The widest bar normalizes to 1, the narrowest to 0
    assert!((rows[0].relative_swing - 1.0).abs() < 1e-12);
    assert!((rows[rows.len() - 1].relative_swing).abs() < 1e-12);

    for row in &rows {
        assert_eq!(row.low_multiplier, 0.7);
        assert_eq!(row.high_multiplier, 1.3);
        assert!((row.swing - (row.high_npv - row.low_npv).abs()).abs() < 1e-9);
    }
}

#[test]
fn scenarios_evaluate_in_input_order() {
    let project = sample_project();
    let scenarios = vec![
        Scenario::new("pessimistic")
            .with(SensitivityParameter::Accuracy, 0.9)
            .with(SensitivityParameter::Cost, 1.2),
        Scenario::new("optimistic")
            .with(SensitivityParameter::Accuracy, 1.1)
            .with(SensitivityParameter::Cost, 0.9),
    ];

    let results = run_scenarios(&project, &scenarios).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, "pessimistic");
    assert_eq!(results[1].0, "optimistic");
    assert!(results[0].1.roi_percentage < results[1].1.roi_percentage);
}

#[test]
fn sweeps_never_mutate_the_caller() {
    let project = sample_project();
    let snapshot = project.clone();

    run_sensitivity_analysis(&project, SensitivityParameter::Risk, &DEFAULT_VARIATIONS).unwrap();
    run_scenarios(
        &project,
        &[Scenario::new("x").with(SensitivityParameter::Cost, 2.0)],
    )
    .unwrap();

    assert_eq!(project, snapshot);
}
