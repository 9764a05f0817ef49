//! Financial metrics over a monthly projection table
//!
//! NPV is a discounted sum, payback an interpolated scan of the cumulative
//! series, and IRR a Newton-Raphson root find on the monthly net cash flows.
//! IRR and payback return `None` when no finite answer exists; callers must
//! treat that as a valid terminal outcome, not a fault.

use crate::model::{MonthlyProjection, OutcomeSample};
use crate::value::MONTHS_PER_YEAR;

/// Default iteration budget for the IRR solver
pub const IRR_MAX_ITERATIONS: u32 = 100;
/// Default convergence tolerance for the IRR solver; also guards against a
/// flat derivative
pub const IRR_TOLERANCE: f64 = 1e-6;

/// Net present value of the monthly net cash flows.
///
/// The annual discount rate is applied at `rate / 12` per month; a zero rate
/// reduces to the plain sum of net values.
#[must_use]
pub fn npv(projections: &[MonthlyProjection], annual_discount_rate: f64) -> f64 {
    let monthly_rate = annual_discount_rate / MONTHS_PER_YEAR;
    projections
        .iter()
        .map(|p| p.net_value / (1.0 + monthly_rate).powi(p.month as i32))
        .sum()
}

/// Break-even month from the cumulative-net series, possibly fractional.
///
/// Scans for the first month with cumulative net ≥ 0. A qualifying first
/// month returns that month number; later crossings interpolate linearly
/// between the last negative and first non-negative cumulative values (a
/// flat segment falls back to the crossing month). Returns `None` when the
/// series never reaches zero.
#[must_use]
pub fn payback_period(projections: &[MonthlyProjection]) -> Option<f64> {
    for (i, projection) in projections.iter().enumerate() {
        if projection.cumulative_net_value >= 0.0 {
            if i == 0 {
                return Some(f64::from(projection.month));
            }
            let prev = &projections[i - 1];
            let change = projection.cumulative_net_value - prev.cumulative_net_value;
            if change != 0.0 {
                let fraction = -prev.cumulative_net_value / change;
                return Some(f64::from(prev.month) + fraction);
            }
            return Some(f64::from(projection.month));
        }
    }
    None
}

/// Return on investment as a percentage; 0 when total cost is not positive
#[must_use]
pub fn roi_percentage(total_risk_adjusted: f64, total_cost: f64) -> f64 {
    if total_cost > 0.0 {
        (total_risk_adjusted - total_cost) / total_cost * 100.0
    } else {
        0.0
    }
}

/// The {ROI, NPV, payback} triple for one projection table; the unit of
/// record for the stochastic and sensitivity wrappers
#[must_use]
pub fn outcome(projections: &[MonthlyProjection], annual_discount_rate: f64) -> OutcomeSample {
    let total_risk_adjusted: f64 = projections.iter().map(|p| p.risk_adjusted_value).sum();
    let total_cost: f64 = projections.iter().map(|p| p.cost).sum();

    OutcomeSample {
        roi: roi_percentage(total_risk_adjusted, total_cost),
        npv: npv(projections, annual_discount_rate),
        payback: payback_period(projections),
    }
}

/// Annualized internal rate of return, as a percentage, with the default
/// iteration budget and tolerance
#[must_use]
pub fn irr(projections: &[MonthlyProjection]) -> Option<f64> {
    irr_with(projections, IRR_MAX_ITERATIONS, IRR_TOLERANCE)
}

/// Annualized IRR via Newton-Raphson on the monthly rate.
///
/// Starts at 10% annual converted to monthly. Returns `None` when the cash
/// flows never change sign (no finite rate can zero a monotone series), when
/// the derivative flattens below `tolerance` (no safe update), or when the
/// iteration budget is exhausted without convergence.
#[must_use]
pub fn irr_with(
    projections: &[MonthlyProjection],
    max_iterations: u32,
    tolerance: f64,
) -> Option<f64> {
    let cash_flows: Vec<f64> = projections.iter().map(|p| p.net_value).collect();

    if cash_flows.iter().all(|cf| *cf >= 0.0) || cash_flows.iter().all(|cf| *cf <= 0.0) {
        return None;
    }

    let mut rate = 0.1 / MONTHS_PER_YEAR;

    for _ in 0..max_iterations {
        let mut npv_value = 0.0;
        let mut npv_derivative = 0.0;

        for (t, cf) in (1..).zip(&cash_flows) {
            let discount = (1.0 + rate).powi(t);
            npv_value += cf / discount;
            npv_derivative -= f64::from(t) * cf / (discount * (1.0 + rate));
        }

        if npv_derivative.abs() < tolerance {
            return None;
        }

        let new_rate = rate - npv_value / npv_derivative;

        if (new_rate - rate).abs() < tolerance {
            let annual_rate = (1.0 + new_rate).powi(MONTHS_PER_YEAR as i32) - 1.0;
            return Some(annual_rate * 100.0);
        }

        rate = new_rate;
    }

    None
}
