//! One-row CSV export of the full result set.

use std::io::Write;
use std::path::Path;

use crate::error::AnalysisError;
use crate::result::AnalysisResult;

/// Column order of the export; one column per metric.
const HEADERS: [&str; 33] = [
    "control_n",
    "treatment_n",
    "control_rate",
    "treatment_rate",
    "absolute_lift",
    "relative_lift_pct",
    "z_stat",
    "p_value",
    "t_stat",
    "t_pvalue",
    "t_df",
    "confidence",
    "control_ci_lower",
    "control_ci_upper",
    "treatment_ci_lower",
    "treatment_ci_upper",
    "diff_ci_lower",
    "diff_ci_upper",
    "cohens_h",
    "effect_category",
    "achieved_power",
    "target_power",
    "required_n_per_group",
    "monthly_visitors",
    "avg_order_value",
    "current_conversions",
    "projected_conversions",
    "additional_conversions",
    "current_revenue",
    "projected_revenue",
    "additional_revenue",
    "annual_revenue_delta",
    "recommendation",
];

/// Serialize the result as a header row plus one value row.
///
/// Undefined metrics export as empty fields.
///
/// # Errors
///
/// Returns [`AnalysisError::Artifact`] if writing fails.
pub fn to_csv(result: &AnalysisResult) -> Result<String, AnalysisError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(result, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| AnalysisError::Artifact(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AnalysisError::Artifact(e.to_string()))
}

/// Write the export to a file path.
///
/// # Errors
///
/// Returns [`AnalysisError::Artifact`] on I/O failure.
pub fn write_csv(result: &AnalysisResult, path: &Path) -> Result<(), AnalysisError> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| AnalysisError::Artifact(e.to_string()))?;
    write_rows(result, &mut writer)?;
    writer
        .flush()
        .map_err(|e| AnalysisError::Artifact(e.to_string()))
}

fn write_rows<W: Write>(
    result: &AnalysisResult,
    writer: &mut csv::Writer<W>,
) -> Result<(), AnalysisError> {
    let opt = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

    let row = [
        result.control.n.to_string(),
        result.treatment.n.to_string(),
        result.metrics.control_rate.to_string(),
        result.metrics.treatment_rate.to_string(),
        result.metrics.absolute_lift.to_string(),
        opt(result.metrics.relative_lift_pct),
        opt(result.hypothesis.map(|h| h.z_stat)),
        opt(result.hypothesis.map(|h| h.p_value)),
        opt(result.hypothesis.map(|h| h.t_stat)),
        opt(result.hypothesis.map(|h| h.t_pvalue)),
        opt(result.hypothesis.map(|h| h.df)),
        result.intervals.confidence.to_string(),
        result.intervals.control.lower.to_string(),
        result.intervals.control.upper.to_string(),
        result.intervals.treatment.lower.to_string(),
        result.intervals.treatment.upper.to_string(),
        result.intervals.difference.lower.to_string(),
        result.intervals.difference.upper.to_string(),
        result.effect.cohens_h.to_string(),
        result.effect.category.to_string(),
        result.power.achieved_power.to_string(),
        result.power.target_power.to_string(),
        opt(result.power.required_n_per_group),
        result.impact.monthly_visitors.to_string(),
        result.impact.avg_order_value.to_string(),
        result.impact.current_conversions.to_string(),
        result.impact.projected_conversions.to_string(),
        result.impact.additional_conversions.to_string(),
        result.impact.current_revenue.to_string(),
        result.impact.projected_revenue.to_string(),
        result.impact.additional_revenue.to_string(),
        result.impact.annual_revenue_delta.to_string(),
        result.recommendation.to_string(),
    ];

    writer
        .write_record(HEADERS)
        .and_then(|()| writer.write_record(&row))
        .map_err(|e| AnalysisError::Artifact(e.to_string()))
}
