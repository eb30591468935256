//! Two-proportion z-test under the pooled null.

use crate::data::Cohort;
use crate::stats::normal::phi;

/// Z statistic and two-tailed p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZTest {
    /// Test statistic.
    pub z_stat: f64,
    /// Two-tailed p-value, `2(1 - Φ(|z|))`.
    pub p_value: f64,
}

/// Run a two-proportion z-test of `treatment` against `control`.
///
/// Uses the pooled proportion `p = (s_c + s_t) / (n_c + n_t)` and standard
/// error `sqrt(p(1-p)(1/n_c + 1/n_t))`. Returns `None` when the pooled
/// variance is zero (every outcome identical across both cohorts), where
/// the statistic is undefined.
pub fn two_proportion_ztest(control: &Cohort, treatment: &Cohort) -> Option<ZTest> {
    let n_c = control.n() as f64;
    let n_t = treatment.n() as f64;

    let pooled = (control.successes() + treatment.successes()) as f64 / (n_c + n_t);
    let pooled_var = pooled * (1.0 - pooled);
    if pooled_var == 0.0 {
        return None;
    }

    let se = (pooled_var * (1.0 / n_c + 1.0 / n_t)).sqrt();
    let z_stat = (treatment.rate() - control.rate()) / se;
    let p_value = 2.0 * (1.0 - phi(z_stat.abs()));

    Some(ZTest { z_stat, p_value })
}
