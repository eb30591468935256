//! # ab-oracle
//!
//! Statistical verdicts for A/B conversion experiments.
//!
//! Given per-user binary conversion outcomes for a control and a treatment
//! cohort (simulated from seeded Bernoulli draws, or supplied as counts),
//! this crate computes:
//! - Conversion rates and absolute/relative lift
//! - A two-proportion z-test cross-checked with a pooled t-test
//! - Wald confidence intervals for each rate and their difference
//! - Cohen's h effect size and its conventional category
//! - Achieved power and the sample size required for 80% power
//! - A projected business-revenue impact and a proceed/hold verdict
//!
//! The verdict is a conjunction: proceed only when the p-value clears the
//! configured alpha *and* the difference interval's lower bound is above
//! zero.
//!
//! ## Quick start
//!
//! ```ignore
//! use ab_oracle::ExperimentAnalyzer;
//!
//! let result = ExperimentAnalyzer::new()
//!     .control_rate(0.12)
//!     .treatment_rate(0.145)
//!     .n_per_group(5_000)
//!     .seed(42)
//!     .run()?;
//!
//! println!("{}", ab_oracle::output::terminal::format_report(&result));
//! ```
//!
//! Results are deterministic: the same seed regenerates bit-identical
//! cohorts, so the full result set reproduces exactly across runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod analyzer;
mod config;
mod error;
mod result;

// Functional modules
pub mod data;
pub mod output;
pub mod stats;

// Re-exports for public API
pub use analyzer::ExperimentAnalyzer;
pub use config::ExperimentConfig;
pub use data::{Cohort, Group, Observation};
pub use error::AnalysisError;
pub use result::{
    AnalysisResult, BasicMetrics, BusinessImpact, ConfidenceInterval, ConfidenceIntervals,
    EffectCategory, EffectSize, GroupSummary, HypothesisTest, PowerAnalysis, Recommendation,
};
