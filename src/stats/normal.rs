//! Shared standard-normal helpers.

use statrs::distribution::{ContinuousCDF, Normal};

fn standard_normal() -> Normal {
    // Parameters are constant and valid.
    Normal::new(0.0, 1.0).expect("standard normal distribution")
}

/// Standard normal CDF, Φ(x).
pub(crate) fn phi(x: f64) -> f64 {
    standard_normal().cdf(x)
}

/// Inverse standard normal CDF (probit), Φ⁻¹(p).
pub(crate) fn probit(p: f64) -> f64 {
    standard_normal().inverse_cdf(p)
}

/// Two-sided critical value at significance `alpha`, Φ⁻¹(1 - α/2).
pub(crate) fn z_critical(alpha: f64) -> f64 {
    probit(1.0 - alpha / 2.0)
}
