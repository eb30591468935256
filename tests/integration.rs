//! End-to-end integration tests.

use ab_oracle::output::{csv, json, terminal};
use ab_oracle::{
    AnalysisError, Cohort, EffectCategory, ExperimentAnalyzer, ExperimentConfig, Group,
    Recommendation,
};

/// The default scenario runs, and the same seed reproduces the result
/// bit-for-bit.
#[test]
fn default_scenario_is_deterministic() {
    let analyzer = ExperimentAnalyzer::new();
    let first = analyzer.run().expect("default scenario should run");
    let second = analyzer.run().expect("default scenario should run");

    assert_eq!(first, second);

    // Empirical rates stay near the configured rates (sd ~0.005 at n=5000).
    assert!((first.metrics.control_rate - 0.12).abs() < 0.03);
    assert!((first.metrics.treatment_rate - 0.145).abs() < 0.03);

    // The statistics are well formed.
    let test = first.hypothesis.expect("non-degenerate data");
    assert!(test.z_stat.is_finite());
    assert!((0.0..=1.0).contains(&test.p_value));
    assert!((0.0..=1.0).contains(&first.power.achieved_power));
    assert!(first.warnings.is_empty());
}

/// A different seed produces different data.
#[test]
fn different_seeds_differ() {
    let a = ExperimentAnalyzer::new().seed(1).run().unwrap();
    let b = ExperimentAnalyzer::new().seed(2).run().unwrap();
    assert_ne!(a, b);
}

/// The verdict always matches the documented conjunction of p-value and
/// difference-interval conditions.
#[test]
fn verdict_matches_decision_rule() {
    for seed in 0..20 {
        let result = ExperimentAnalyzer::new().seed(seed).run().unwrap();
        let expected = match &result.hypothesis {
            Some(test) => test.p_value < result.config.alpha
                && result.intervals.difference.lower > 0.0,
            None => false,
        };
        assert_eq!(
            result.recommendation.is_proceed(),
            expected,
            "seed {seed} verdict disagrees with decision rule"
        );
    }
}

/// Exact-count scenario: 600/5000 vs 725/5000 reproduces the reference
/// statistics end to end.
#[test]
fn reference_counts_scenario() {
    let control = Cohort::from_counts(Group::Control, 600, 5_000).unwrap();
    let treatment = Cohort::from_counts(Group::Treatment, 725, 5_000).unwrap();
    let result = ExperimentAnalyzer::new()
        .analyze(&control, &treatment)
        .unwrap();

    let test = result.hypothesis.unwrap();
    assert!((test.z_stat - 3.6869).abs() < 1e-3, "z = {}", test.z_stat);
    assert!(test.p_value < 0.001);
    assert!((test.t_stat - test.z_stat).abs() < 0.01);

    assert!((result.effect.cohens_h - 0.0738).abs() < 1e-3);
    assert_eq!(result.effect.category, EffectCategory::Small);

    assert!((result.power.achieved_power - 0.958).abs() < 0.005);
    let required = result.power.required_n_per_group.unwrap();
    assert!((required - 2_880.0).abs() < 30.0, "required n = {required}");

    // Defaults: 100k visitors at $75 AOV, 2.5pp lift.
    assert!((result.impact.additional_conversions - 2_500.0).abs() < 1e-9);
    assert!((result.impact.additional_revenue - 187_500.0).abs() < 1e-9);

    assert_eq!(result.recommendation, Recommendation::Proceed);
}

/// Degenerate data surfaces warnings and a hold verdict, never a crash.
#[test]
fn degenerate_data_is_surfaced_not_masked() {
    let control = Cohort::from_counts(Group::Control, 0, 500).unwrap();
    let treatment = Cohort::from_counts(Group::Treatment, 0, 500).unwrap();
    let result = ExperimentAnalyzer::new()
        .analyze(&control, &treatment)
        .unwrap();

    assert!(result.hypothesis.is_none());
    assert!(result.metrics.relative_lift_pct.is_none());
    assert!(!result.warnings.is_empty());
    assert_eq!(result.recommendation, Recommendation::InsufficientEvidence);

    // All surfaces still render.
    let report = terminal::format_report(&result);
    assert!(report.contains("INSUFFICIENT EVIDENCE"));
    assert!(json::to_json(&result).is_ok());
    assert!(csv::to_csv(&result).is_ok());
}

/// Invalid configuration is rejected before any stage runs.
#[test]
fn invalid_configuration_is_rejected() {
    let bad = [
        ExperimentConfig {
            control_rate: -0.1,
            ..ExperimentConfig::default()
        },
        ExperimentConfig {
            treatment_rate: 1.1,
            ..ExperimentConfig::default()
        },
        ExperimentConfig {
            n_per_group: 0,
            ..ExperimentConfig::default()
        },
        ExperimentConfig {
            alpha: 0.0,
            ..ExperimentConfig::default()
        },
    ];
    for config in bad {
        let err = ExperimentAnalyzer::with_config(config).run().unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidConfig { .. } | AnalysisError::EmptyCohort
        ));
    }
}

/// Result serialization carries every pipeline stage.
#[test]
fn result_serialization() {
    let result = ExperimentAnalyzer::new().run().unwrap();
    let json = serde_json::to_string(&result).expect("should serialize");
    for key in [
        "control_rate",
        "z_stat",
        "cohens_h",
        "achieved_power",
        "additional_revenue",
        "recommendation",
    ] {
        assert!(json.contains(key), "missing key {key}");
    }
}
