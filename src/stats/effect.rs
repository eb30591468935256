//! Cohen's h effect size for two proportions.

/// Cohen's h, `2(asin√p_t - asin√p_c)`.
///
/// Positive when the treatment rate is higher.
pub fn cohens_h(control_rate: f64, treatment_rate: f64) -> f64 {
    2.0 * (treatment_rate.sqrt().asin() - control_rate.sqrt().asin())
}

/// Arcsine-transformed effect size used by the power analysis.
///
/// Identical to Cohen's h; named separately because the power stage treats
/// it as the standardized input, not as a reported effect.
pub fn proportion_effect_size(control_rate: f64, treatment_rate: f64) -> f64 {
    cohens_h(control_rate, treatment_rate)
}
