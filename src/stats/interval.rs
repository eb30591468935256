//! Wald confidence intervals for proportions.
//!
//! Critical values are always derived from the inverse normal CDF so the
//! confidence level stays a parameter, never a hardcoded 1.96.

use crate::data::Cohort;
use crate::result::ConfidenceInterval;
use crate::stats::normal::probit;

/// Wald interval for a single proportion at the given confidence level.
///
/// `rate ± Φ⁻¹(1 - (1-confidence)/2) * sqrt(rate(1-rate)/n)`. At a rate of
/// exactly 0 or 1 the standard error collapses and the interval degenerates
/// to a point, which is the documented Wald behavior.
pub fn wald_interval(successes: usize, n: usize, confidence: f64) -> ConfidenceInterval {
    let rate = successes as f64 / n as f64;
    let z = probit(1.0 - (1.0 - confidence) / 2.0);
    let se = (rate * (1.0 - rate) / n as f64).sqrt();
    let margin = z * se;
    ConfidenceInterval {
        lower: rate - margin,
        upper: rate + margin,
    }
}

/// Wald interval for the difference `treatment_rate - control_rate`.
///
/// Uses the unpooled standard error
/// `sqrt(p_c(1-p_c)/n_c + p_t(1-p_t)/n_t)`.
pub fn difference_interval(
    control: &Cohort,
    treatment: &Cohort,
    confidence: f64,
) -> ConfidenceInterval {
    let p_c = control.rate();
    let p_t = treatment.rate();
    let diff = p_t - p_c;

    let z = probit(1.0 - (1.0 - confidence) / 2.0);
    let se = (p_c * (1.0 - p_c) / control.n() as f64 + p_t * (1.0 - p_t) / treatment.n() as f64)
        .sqrt();
    let margin = z * se;
    ConfidenceInterval {
        lower: diff - margin,
        upper: diff + margin,
    }
}
