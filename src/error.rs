//! Error taxonomy for experiment analysis.
//!
//! Only two things are hard failures: a configuration that is rejected
//! before the pipeline runs, and a cohort with no observations. Degenerate
//! statistics (zero control rate, zero pooled variance) are surfaced as
//! `None` metrics plus a warning on the result, never as errors. Artifact
//! failures are reported so callers can log and continue.

use thiserror::Error;

/// Errors produced by experiment analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Configuration rejected before the pipeline ran.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the rejected field.
        reason: String,
    },

    /// A cohort must contain at least one observation.
    #[error("cohort must contain at least one observation")]
    EmptyCohort,

    /// Best-effort artifact generation (chart, CSV export) failed.
    ///
    /// Callers should treat this as a warning: the analysis result is
    /// still valid.
    #[error("artifact generation failed: {0}")]
    Artifact(String),
}

impl AnalysisError {
    /// Shorthand for configuration rejections.
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
