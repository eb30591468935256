//! JSON serialization for analysis results.

use crate::result::AnalysisResult;

/// Serialize an AnalysisResult to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// AnalysisResult).
pub fn to_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize an AnalysisResult to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// AnalysisResult).
pub fn to_json_pretty(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ExperimentAnalyzer;
    use crate::data::{Cohort, Group};
    use crate::result::Recommendation;

    fn make_result() -> AnalysisResult {
        let control = Cohort::from_counts(Group::Control, 600, 5_000).unwrap();
        let treatment = Cohort::from_counts(Group::Treatment, 725, 5_000).unwrap();
        ExperimentAnalyzer::new()
            .analyze(&control, &treatment)
            .unwrap()
    }

    #[test]
    fn compact_json_carries_the_metrics() {
        let json = to_json(&make_result()).unwrap();
        assert!(json.contains("\"control_rate\":0.12"));
        assert!(json.contains("\"z_stat\""));
        assert!(json.contains("\"cohens_h\""));
        assert!(json.contains("\"recommendation\""));
    }

    #[test]
    fn pretty_json_is_multiline() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("achieved_power"));
    }

    #[test]
    fn json_round_trips() {
        let result = make_result();
        let json = to_json(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.recommendation, Recommendation::Proceed);
        assert_eq!(parsed.control.conversions, 600);
    }
}
