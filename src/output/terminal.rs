//! Terminal report formatting with colors.

use colored::Colorize;

use crate::result::AnalysisResult;

/// Format an AnalysisResult as the ordered human-readable report.
///
/// Sections: Basic Metrics, Hypothesis Test, Confidence Intervals, Effect
/// Size, Power Analysis, Business Impact, Recommendation. Percentages and
/// currency print to 2 decimals, test statistics to 4.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let sep = "\u{2500}".repeat(62);

    out.push_str("ab-oracle\n");
    out.push_str(&sep);
    out.push('\n');
    out.push('\n');

    // 1. Basic metrics
    out.push_str("1. BASIC METRICS\n");
    out.push_str(&format!(
        "  Control rate:    {:.2}%  ({} / {})\n",
        result.metrics.control_rate * 100.0,
        result.control.conversions,
        result.control.n
    ));
    out.push_str(&format!(
        "  Treatment rate:  {:.2}%  ({} / {})\n",
        result.metrics.treatment_rate * 100.0,
        result.treatment.conversions,
        result.treatment.n
    ));
    out.push_str(&format!(
        "  Absolute lift:   {:.2} pp\n",
        result.metrics.absolute_lift * 100.0
    ));
    match result.metrics.relative_lift_pct {
        Some(lift) => out.push_str(&format!("  Relative lift:   {:.2}%\n", lift)),
        None => out.push_str("  Relative lift:   undefined (control rate is zero)\n"),
    }
    out.push('\n');

    // 2. Hypothesis test
    out.push_str("2. HYPOTHESIS TEST\n");
    match &result.hypothesis {
        Some(test) => {
            out.push_str(&format!("  Z statistic:     {:.4}\n", test.z_stat));
            out.push_str(&format!("  P-value:         {:.4}\n", test.p_value));
            out.push_str(&format!(
                "  T cross-check:   t = {:.4}, p = {:.4} (df = {:.0})\n",
                test.t_stat, test.t_pvalue, test.df
            ));
            out.push_str(&format!("  Alpha:           {}\n", result.config.alpha));
            if test.significant {
                out.push_str(&format!(
                    "  {}\n",
                    "Statistically significant".green().bold()
                ));
            } else {
                out.push_str(&format!("  {}\n", "Not significant".yellow().bold()));
            }
        }
        None => out.push_str(&format!(
            "  {}\n",
            "Undefined: zero pooled variance".yellow().bold()
        )),
    }
    out.push('\n');

    // 3. Confidence intervals
    let pct = result.intervals.confidence * 100.0;
    out.push_str("3. CONFIDENCE INTERVALS\n");
    out.push_str(&format!(
        "  Control {:.0}% CI:    [{:.2}%, {:.2}%]\n",
        pct,
        result.intervals.control.lower * 100.0,
        result.intervals.control.upper * 100.0
    ));
    out.push_str(&format!(
        "  Treatment {:.0}% CI:  [{:.2}%, {:.2}%]\n",
        pct,
        result.intervals.treatment.lower * 100.0,
        result.intervals.treatment.upper * 100.0
    ));
    out.push_str(&format!(
        "  Difference {:.0}% CI: [{:.2}%, {:.2}%]\n",
        pct,
        result.intervals.difference.lower * 100.0,
        result.intervals.difference.upper * 100.0
    ));
    out.push('\n');

    // 4. Effect size
    out.push_str("4. EFFECT SIZE\n");
    out.push_str(&format!(
        "  Cohen's h:       {:.4}\n",
        result.effect.cohens_h
    ));
    out.push_str(&format!("  Category:        {}\n", result.effect.category));
    out.push('\n');

    // 5. Power analysis
    out.push_str("5. POWER ANALYSIS\n");
    out.push_str(&format!(
        "  Achieved power:  {:.2}%\n",
        result.power.achieved_power * 100.0
    ));
    match result.power.required_n_per_group {
        Some(n) => out.push_str(&format!(
            "  Required n for {:.0}% power: {:.0} per group\n",
            result.power.target_power * 100.0,
            n.ceil()
        )),
        None => out.push_str("  Required n: undefined (zero effect size)\n"),
    }
    out.push('\n');

    // 6. Business impact
    out.push_str("6. BUSINESS IMPACT\n");
    out.push_str(&format!(
        "  Additional monthly conversions: {:.0}\n",
        result.impact.additional_conversions
    ));
    out.push_str(&format!(
        "  Additional monthly revenue:     ${:.2}\n",
        result.impact.additional_revenue
    ));
    out.push_str(&format!(
        "  Additional annual revenue:      ${:.2}\n",
        result.impact.annual_revenue_delta
    ));
    out.push('\n');

    // 7. Recommendation
    out.push_str("7. RECOMMENDATION\n");
    if result.recommendation.is_proceed() {
        out.push_str(&format!("  {}\n", "PROCEED WITH ROLLOUT".green().bold()));
        out.push_str(
            "  The treatment shows a statistically significant improvement\n  with a difference interval clear of zero.\n",
        );
    } else {
        out.push_str(&format!(
            "  {}\n",
            "INSUFFICIENT EVIDENCE - DO NOT PROCEED".yellow().bold()
        ));
        out.push_str("  Consider extending the test or trying a different variant.\n");
    }

    if !result.warnings.is_empty() {
        out.push('\n');
        out.push_str(&sep);
        out.push('\n');
        for warning in &result.warnings {
            out.push_str(&format!("  {} {}\n", "warning:".yellow(), warning));
        }
    }

    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ExperimentAnalyzer;
    use crate::data::{Cohort, Group};

    fn analyzed(s_c: usize, s_t: usize) -> AnalysisResult {
        let control = Cohort::from_counts(Group::Control, s_c, 5_000).unwrap();
        let treatment = Cohort::from_counts(Group::Treatment, s_t, 5_000).unwrap();
        ExperimentAnalyzer::new()
            .analyze(&control, &treatment)
            .unwrap()
    }

    #[test]
    fn report_contains_all_sections_in_order() {
        let report = format_report(&analyzed(600, 725));
        let sections = [
            "1. BASIC METRICS",
            "2. HYPOTHESIS TEST",
            "3. CONFIDENCE INTERVALS",
            "4. EFFECT SIZE",
            "5. POWER ANALYSIS",
            "6. BUSINESS IMPACT",
            "7. RECOMMENDATION",
        ];
        let mut last = 0;
        for section in sections {
            let pos = report
                .find(section)
                .unwrap_or_else(|| panic!("missing section {section}"));
            assert!(pos >= last, "section {section} out of order");
            last = pos;
        }
    }

    #[test]
    fn winning_result_recommends_rollout() {
        let report = format_report(&analyzed(600, 725));
        assert!(report.contains("PROCEED WITH ROLLOUT"));
        assert!(report.contains("Statistically significant"));
    }

    #[test]
    fn flat_result_recommends_holding() {
        let report = format_report(&analyzed(600, 605));
        assert!(report.contains("INSUFFICIENT EVIDENCE"));
        assert!(report.contains("Not significant"));
    }

    #[test]
    fn degenerate_result_prints_warnings() {
        let report = format_report(&analyzed(0, 0));
        assert!(report.contains("Undefined: zero pooled variance"));
        assert!(report.contains("undefined (control rate is zero)"));
        assert!(report.contains("warning:"));
    }
}
