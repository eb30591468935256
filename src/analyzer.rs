//! Main `ExperimentAnalyzer` entry point and pipeline.

use crate::config::ExperimentConfig;
use crate::data::{generate_cohorts, Cohort};
use crate::error::AnalysisError;
use crate::result::{
    AnalysisResult, BusinessImpact, ConfidenceIntervals, EffectCategory, EffectSize,
    GroupSummary, HypothesisTest, PowerAnalysis, Recommendation,
};
use crate::stats::{
    achieved_power, cohens_h, compute_metrics, difference_interval, effective_n_per_group,
    pooled_ttest, required_n_per_group, two_proportion_ztest, wald_interval,
};

/// Target power used when solving for the required sample size.
const TARGET_POWER: f64 = 0.8;

/// Main entry point for experiment analysis.
///
/// Runs six sequential stages over one cohort pair: data generation,
/// descriptive metrics, hypothesis test, interval estimation, effect size
/// and power, business impact and recommendation. Each run is an isolated,
/// side-effect-free computation over its own result instance.
///
/// # Example
///
/// ```ignore
/// use ab_oracle::ExperimentAnalyzer;
///
/// let result = ExperimentAnalyzer::new()
///     .control_rate(0.12)
///     .treatment_rate(0.145)
///     .n_per_group(5_000)
///     .run()?;
///
/// println!("p = {:.4}, verdict: {}", result.hypothesis.unwrap().p_value, result.recommendation);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExperimentAnalyzer {
    config: ExperimentConfig,
}

impl ExperimentAnalyzer {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: ExperimentConfig::default(),
        }
    }

    /// Create from an existing configuration.
    pub fn with_config(config: ExperimentConfig) -> Self {
        Self { config }
    }

    /// Set the simulated control conversion rate.
    pub fn control_rate(mut self, rate: f64) -> Self {
        self.config.control_rate = rate;
        self
    }

    /// Set the simulated treatment conversion rate.
    pub fn treatment_rate(mut self, rate: f64) -> Self {
        self.config.treatment_rate = rate;
        self
    }

    /// Set the per-group sample size.
    pub fn n_per_group(mut self, n: usize) -> Self {
        self.config.n_per_group = n;
        self
    }

    /// Set the significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the monthly visitors for the business projection.
    pub fn monthly_visitors(mut self, visitors: u64) -> Self {
        self.config.monthly_visitors = visitors;
        self
    }

    /// Set the average order value for the business projection.
    pub fn avg_order_value(mut self, value: f64) -> Self {
        self.config.avg_order_value = value;
        self
    }

    /// Set the data-generation seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Generate the cohort pair and run the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] when the configuration is
    /// rejected; degenerate statistics do not error (see
    /// [`AnalysisResult::warnings`]).
    pub fn run(&self) -> Result<AnalysisResult, AnalysisError> {
        self.config.validate()?;
        let (control, treatment) = generate_cohorts(&self.config)?;
        self.analyze(&control, &treatment)
    }

    /// Run the pipeline over externally supplied cohorts.
    ///
    /// The simulated-rate fields of the configuration are ignored; alpha
    /// and the business inputs apply as configured.
    pub fn analyze(
        &self,
        control: &Cohort,
        treatment: &Cohort,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.config.validate()?;
        if control.n() == 0 || treatment.n() == 0 {
            return Err(AnalysisError::EmptyCohort);
        }

        let mut warnings = Vec::new();

        // Stage 2: descriptive metrics.
        let metrics = compute_metrics(control, treatment);
        if metrics.relative_lift_pct.is_none() {
            warnings.push("relative lift undefined: control rate is zero".to_string());
        }

        // Stage 3: hypothesis test with t-test cross-check.
        let hypothesis = match (
            two_proportion_ztest(control, treatment),
            pooled_ttest(control, treatment),
        ) {
            (Some(z), Some(t)) => Some(HypothesisTest {
                z_stat: z.z_stat,
                p_value: z.p_value,
                t_stat: t.t_stat,
                t_pvalue: t.p_value,
                df: t.df,
                significant: z.p_value < self.config.alpha,
            }),
            _ => {
                warnings.push(
                    "hypothesis test undefined: zero pooled variance (all outcomes identical)"
                        .to_string(),
                );
                None
            }
        };

        // Stage 4: Wald intervals at confidence 1 - alpha.
        let confidence = 1.0 - self.config.alpha;
        let intervals = ConfidenceIntervals {
            confidence,
            control: wald_interval(control.successes(), control.n(), confidence),
            treatment: wald_interval(treatment.successes(), treatment.n(), confidence),
            difference: difference_interval(control, treatment, confidence),
        };

        // Stage 5: effect size and power.
        let h = cohens_h(metrics.control_rate, metrics.treatment_rate);
        let effect = EffectSize {
            cohens_h: h,
            category: EffectCategory::from_h(h),
        };

        let required = required_n_per_group(h, self.config.alpha, TARGET_POWER);
        if required.is_none() {
            warnings.push(
                "required sample size undefined: zero effect size".to_string(),
            );
        }
        // Harmonic-mean effective size so unequal cohorts are handled.
        let n_eff = effective_n_per_group(control.n() as f64, treatment.n() as f64);
        let power = PowerAnalysis {
            effect_size: h,
            achieved_power: achieved_power(h, n_eff, self.config.alpha),
            target_power: TARGET_POWER,
            required_n_per_group: required,
        };

        // Stage 6: business impact and verdict.
        let impact = self.project_impact(metrics.control_rate, metrics.treatment_rate);
        let recommendation = match &hypothesis {
            Some(test) if test.significant && intervals.difference.excludes_zero_below() => {
                Recommendation::Proceed
            }
            _ => Recommendation::InsufficientEvidence,
        };

        Ok(AnalysisResult {
            config: self.config.clone(),
            control: summarize(control),
            treatment: summarize(treatment),
            metrics,
            hypothesis,
            intervals,
            effect,
            power,
            impact,
            recommendation,
            warnings,
        })
    }

    fn project_impact(&self, control_rate: f64, treatment_rate: f64) -> BusinessImpact {
        let visitors = self.config.monthly_visitors as f64;
        let aov = self.config.avg_order_value;

        let current_conversions = visitors * control_rate;
        let projected_conversions = visitors * treatment_rate;
        let current_revenue = current_conversions * aov;
        let projected_revenue = projected_conversions * aov;
        let additional_revenue = projected_revenue - current_revenue;

        BusinessImpact {
            monthly_visitors: self.config.monthly_visitors,
            avg_order_value: aov,
            current_conversions,
            projected_conversions,
            additional_conversions: projected_conversions - current_conversions,
            current_revenue,
            projected_revenue,
            additional_revenue,
            annual_revenue_delta: additional_revenue * 12.0,
        }
    }
}

fn summarize(cohort: &Cohort) -> GroupSummary {
    GroupSummary {
        group: cohort.group(),
        n: cohort.n(),
        conversions: cohort.successes(),
        rate: cohort.rate(),
    }
}
