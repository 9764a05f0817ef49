//! Sensitivity evaluator - reruns the projection pipeline over modified
//! copies of a project.
//!
//! Each grid point operates on its own clone; the caller's project is never
//! mutated. Points are emitted in the order of the input multiplier list,
//! never re-sorted.

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;
use crate::metrics;
use crate::model::{FullResults, Project};
use crate::projection;
use crate::stats;

use super::{Scenario, SensitivityParameter};

/// Pipeline outcome at one multiplier of a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub multiplier: f64,
    pub roi: f64,
    pub npv: f64,
    pub payback: Option<f64>,
}

/// One bar of a tornado chart: the NPV range a single parameter produces
/// across its multiplier grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoRow {
    pub parameter: SensitivityParameter,
    pub low_multiplier: f64,
    pub high_multiplier: f64,
    pub low_npv: f64,
    pub high_npv: f64,
    /// |high − low|
    pub swing: f64,
    /// Swing min-max normalized across all rows
    pub relative_swing: f64,
}

/// Vary one parameter across `variations`, rerunning the full pipeline per
/// multiplier. Results follow the input order.
pub fn run_sensitivity_analysis(
    project: &Project,
    parameter: SensitivityParameter,
    variations: &[f64],
) -> Result<Vec<SensitivityPoint>, ProjectError> {
    project.validate()?;

    Ok(variations
        .iter()
        .map(|&multiplier| {
            let mut trial = project.clone();
            parameter.apply(&mut trial, multiplier);

            let projections = projection::monthly_projections(&trial);
            let outcome = metrics::outcome(&projections, trial.discount_rate);

            SensitivityPoint {
                multiplier,
                roi: outcome.roi,
                npv: outcome.npv,
                payback: outcome.payback,
            }
        })
        .collect())
}

/// Tornado-chart rows: for each parameter, the NPV at the low and high ends
/// of the grid, sorted by swing descending. Parameters with an empty grid
/// are skipped.
pub fn tornado_analysis(
    project: &Project,
    parameters: &[SensitivityParameter],
    variations: &[f64],
) -> Result<Vec<TornadoRow>, ProjectError> {
    let mut rows = Vec::with_capacity(parameters.len());

    for &parameter in parameters {
        let points = run_sensitivity_analysis(project, parameter, variations)?;
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            rows.push(TornadoRow {
                parameter,
                low_multiplier: first.multiplier,
                high_multiplier: last.multiplier,
                low_npv: first.npv,
                high_npv: last.npv,
                swing: (last.npv - first.npv).abs(),
                relative_swing: 0.0,
            });
        }
    }

    rows.sort_by(|a, b| b.swing.total_cmp(&a.swing));

    let swings: Vec<f64> = rows.iter().map(|r| r.swing).collect();
    for (row, relative) in rows.iter_mut().zip(stats::normalize(&swings)) {
        row.relative_swing = relative;
    }

    Ok(rows)
}

/// Evaluate named what-if scenarios, each against its own copy of the
/// project. Results follow the input order.
pub fn run_scenarios(
    project: &Project,
    scenarios: &[Scenario],
) -> Result<Vec<(String, FullResults)>, ProjectError> {
    scenarios
        .iter()
        .map(|scenario| {
            let mut trial = project.clone();
            for (parameter, multiplier) in &scenario.modifications {
                parameter.apply(&mut trial, *multiplier);
            }
            Ok((scenario.name.clone(), projection::evaluate(&trial)?))
        })
        .collect()
}
