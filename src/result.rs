//! Analysis result types.
//!
//! `AnalysisResult` replaces the incidental metric-name-to-value mapping of
//! ad-hoc analysis scripts with one typed field per metric, populated by
//! return values threaded through the pipeline. Degenerate metrics are
//! `None` with an explanatory entry in `warnings`.

use serde::{Deserialize, Serialize};

use crate::config::ExperimentConfig;
use crate::data::Group;

/// Complete result from one experiment analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Configuration the analysis ran with.
    pub config: ExperimentConfig,

    /// Control cohort summary.
    pub control: GroupSummary,

    /// Treatment cohort summary.
    pub treatment: GroupSummary,

    /// Descriptive rates and lift.
    pub metrics: BasicMetrics,

    /// Hypothesis test, `None` when the pooled variance is zero.
    pub hypothesis: Option<HypothesisTest>,

    /// Wald confidence intervals for each rate and their difference.
    pub intervals: ConfidenceIntervals,

    /// Cohen's h effect size.
    pub effect: EffectSize,

    /// Achieved power and required sample size.
    pub power: PowerAnalysis,

    /// Projected business impact.
    pub impact: BusinessImpact,

    /// Final verdict from the documented decision rule.
    pub recommendation: Recommendation,

    /// Degenerate-statistic indicators (empty when every metric is defined).
    pub warnings: Vec<String>,
}

/// Aggregate view of one cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Experiment arm.
    pub group: Group,
    /// Number of observations.
    pub n: usize,
    /// Number of conversions.
    pub conversions: usize,
    /// Sample conversion rate.
    pub rate: f64,
}

/// Descriptive metrics comparing the two cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicMetrics {
    /// Control conversion rate.
    pub control_rate: f64,
    /// Treatment conversion rate.
    pub treatment_rate: f64,
    /// `treatment_rate - control_rate`.
    pub absolute_lift: f64,
    /// `(treatment_rate / control_rate - 1) * 100`.
    ///
    /// `None` when the control rate is zero (undefined, not ±Inf).
    pub relative_lift_pct: Option<f64>,
}

/// Two-proportion z-test with a pooled two-sample t-test cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HypothesisTest {
    /// Z statistic from the pooled two-proportion test.
    pub z_stat: f64,
    /// Two-tailed p-value of the z statistic.
    pub p_value: f64,
    /// T statistic from the pooled-variance two-sample t-test.
    pub t_stat: f64,
    /// Two-tailed p-value of the t statistic.
    pub t_pvalue: f64,
    /// Degrees of freedom of the t-test, `n_c + n_t - 2`.
    pub df: f64,
    /// Whether `p_value < alpha`.
    pub significant: bool,
}

/// A two-sided confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Whether the interval excludes zero from below.
    pub fn excludes_zero_below(&self) -> bool {
        self.lower > 0.0
    }
}

/// Wald intervals for the cohort rates and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceIntervals {
    /// Confidence level, `1 - alpha`.
    pub confidence: f64,
    /// Interval for the control rate.
    pub control: ConfidenceInterval,
    /// Interval for the treatment rate.
    pub treatment: ConfidenceInterval,
    /// Interval for `treatment_rate - control_rate`.
    pub difference: ConfidenceInterval,
}

/// Cohen's h effect size and its conventional category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSize {
    /// Cohen's h, `2(asin√p_t - asin√p_c)`.
    pub cohens_h: f64,
    /// Conventional magnitude category of `|h|`.
    pub category: EffectCategory,
}

/// Conventional magnitude categories for Cohen's h.
///
/// Boundaries go to the higher category: exactly 0.2 is `Medium`,
/// exactly 0.5 is `Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectCategory {
    /// `|h| < 0.2`
    Small,
    /// `0.2 <= |h| < 0.5`
    Medium,
    /// `|h| >= 0.5`
    Large,
}

impl EffectCategory {
    /// Categorize an effect size by magnitude.
    pub fn from_h(h: f64) -> Self {
        let h = h.abs();
        if h < 0.2 {
            EffectCategory::Small
        } else if h < 0.5 {
            EffectCategory::Medium
        } else {
            EffectCategory::Large
        }
    }
}

impl std::fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectCategory::Small => write!(f, "Small"),
            EffectCategory::Medium => write!(f, "Medium"),
            EffectCategory::Large => write!(f, "Large"),
        }
    }
}

/// Power analysis of the two-sided z-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerAnalysis {
    /// Arcsine-transformed effect size the power is computed for.
    pub effect_size: f64,
    /// Achieved power at the configured sample size and alpha.
    pub achieved_power: f64,
    /// Target power used for the sample-size solve (0.8).
    pub target_power: f64,
    /// Per-group sample size reaching `target_power`, `None` when the
    /// effect size is zero.
    pub required_n_per_group: Option<f64>,
}

/// Projected business impact of rolling out the treatment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessImpact {
    /// Monthly visitors the projection scales to.
    pub monthly_visitors: u64,
    /// Average order value in currency units.
    pub avg_order_value: f64,
    /// Monthly conversions at the control rate.
    pub current_conversions: f64,
    /// Monthly conversions at the treatment rate.
    pub projected_conversions: f64,
    /// `projected - current` conversions per month.
    pub additional_conversions: f64,
    /// Monthly revenue at the control rate.
    pub current_revenue: f64,
    /// Monthly revenue at the treatment rate.
    pub projected_revenue: f64,
    /// `projected - current` revenue per month.
    pub additional_revenue: f64,
    /// Twelve months of additional revenue.
    pub annual_revenue_delta: f64,
}

/// Final verdict of the analysis.
///
/// `Proceed` requires both a significant p-value and a difference interval
/// whose lower bound excludes zero; the p-value alone is not enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Roll out the treatment.
    Proceed,
    /// Keep the control; extend the test or try a different variant.
    InsufficientEvidence,
}

impl Recommendation {
    /// Whether the verdict is to proceed with the rollout.
    pub fn is_proceed(&self) -> bool {
        matches!(self, Recommendation::Proceed)
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Proceed => write!(f, "proceed"),
            Recommendation::InsufficientEvidence => write!(f, "insufficient evidence"),
        }
    }
}
