//! Descriptive metrics: conversion rates and lift.

use crate::data::Cohort;
use crate::result::BasicMetrics;

/// Compute rates and lift for a cohort pair.
///
/// Relative lift is undefined when the control rate is zero; the field is
/// `None` rather than ±Inf so the condition is explicit downstream.
pub fn compute_metrics(control: &Cohort, treatment: &Cohort) -> BasicMetrics {
    let control_rate = control.rate();
    let treatment_rate = treatment.rate();

    let relative_lift_pct = if control_rate > 0.0 {
        Some((treatment_rate / control_rate - 1.0) * 100.0)
    } else {
        None
    };

    BasicMetrics {
        control_rate,
        treatment_rate,
        absolute_lift: treatment_rate - control_rate,
        relative_lift_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Group;

    #[test]
    fn rates_and_lift() {
        let control = Cohort::from_counts(Group::Control, 120, 1_000).unwrap();
        let treatment = Cohort::from_counts(Group::Treatment, 150, 1_000).unwrap();
        let metrics = compute_metrics(&control, &treatment);

        assert!((metrics.control_rate - 0.12).abs() < 1e-12);
        assert!((metrics.treatment_rate - 0.15).abs() < 1e-12);
        assert!((metrics.absolute_lift - 0.03).abs() < 1e-12);
        assert!((metrics.relative_lift_pct.unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn relative_lift_round_trips() {
        // treatment_rate == control_rate * (1 + relative_lift_pct / 100)
        let control = Cohort::from_counts(Group::Control, 617, 5_000).unwrap();
        let treatment = Cohort::from_counts(Group::Treatment, 731, 5_000).unwrap();
        let metrics = compute_metrics(&control, &treatment);

        let reconstructed =
            metrics.control_rate * (1.0 + metrics.relative_lift_pct.unwrap() / 100.0);
        assert!((reconstructed - metrics.treatment_rate).abs() < 1e-12);
    }

    #[test]
    fn zero_control_rate_yields_undefined_relative_lift() {
        let control = Cohort::from_counts(Group::Control, 0, 1_000).unwrap();
        let treatment = Cohort::from_counts(Group::Treatment, 150, 1_000).unwrap();
        let metrics = compute_metrics(&control, &treatment);

        assert!(metrics.relative_lift_pct.is_none());
        assert!((metrics.absolute_lift - 0.15).abs() < 1e-12);
    }

    #[test]
    fn negative_lift_is_preserved() {
        let control = Cohort::from_counts(Group::Control, 200, 1_000).unwrap();
        let treatment = Cohort::from_counts(Group::Treatment, 150, 1_000).unwrap();
        let metrics = compute_metrics(&control, &treatment);

        assert!(metrics.absolute_lift < 0.0);
        assert!((metrics.relative_lift_pct.unwrap() + 25.0).abs() < 1e-9);
    }
}
