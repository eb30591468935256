//! Pooled-variance two-sample t-test on the raw 0/1 outcome vectors.
//!
//! This is the equal-variance Student's t-test (the reference-library
//! default), used as an independent cross-check on the z-test. For binary
//! data the sufficient statistics are the counts, so the test is computed
//! from rates and Bessel-corrected variances without materializing the
//! outcome vectors.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::data::Cohort;

/// T statistic, two-tailed p-value, and degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTest {
    /// Test statistic, positive when the treatment mean is higher.
    pub t_stat: f64,
    /// Two-tailed p-value under Student's t with `df` degrees of freedom.
    pub p_value: f64,
    /// Degrees of freedom, `n_c + n_t - 2`.
    pub df: f64,
}

/// Run a pooled two-sample t-test of `treatment` against `control`.
///
/// Returns `None` when the pooled variance is zero or there are fewer than
/// three observations in total (no degrees of freedom).
pub fn pooled_ttest(control: &Cohort, treatment: &Cohort) -> Option<TTest> {
    let n_c = control.n() as f64;
    let n_t = treatment.n() as f64;
    let df = n_c + n_t - 2.0;
    if df < 1.0 {
        return None;
    }

    let pooled_var =
        ((n_c - 1.0) * control.sample_variance() + (n_t - 1.0) * treatment.sample_variance()) / df;
    if pooled_var <= 0.0 {
        return None;
    }

    let se = (pooled_var * (1.0 / n_c + 1.0 / n_t)).sqrt();
    let t_stat = (treatment.rate() - control.rate()) / se;

    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    let p_value = 2.0 * (1.0 - dist.cdf(t_stat.abs()));

    Some(TTest {
        t_stat,
        p_value,
        df,
    })
}
