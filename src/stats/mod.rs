//! Statistical stages of the analysis pipeline.
//!
//! Each submodule is one closed-form computation over the cohort pair:
//! - Descriptive rates and lift
//! - Two-proportion z-test with a pooled t-test cross-check
//! - Wald confidence intervals
//! - Cohen's h effect size
//! - Achieved power and required sample size

mod effect;
mod interval;
mod metrics;
pub(crate) mod normal;
mod power;
mod ttest;
mod ztest;

pub use effect::{cohens_h, proportion_effect_size};
pub use interval::{difference_interval, wald_interval};
pub use metrics::compute_metrics;
pub use power::{achieved_power, effective_n_per_group, required_n_per_group};
pub use ttest::{pooled_ttest, TTest};
pub use ztest::{two_proportion_ztest, ZTest};
