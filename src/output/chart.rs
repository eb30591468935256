//! Best-effort SVG bar chart of the two conversion rates.
//!
//! Chart generation is an artifact, not part of the verdict: failures
//! surface as [`AnalysisError::Artifact`] so callers can log and continue.

use std::path::Path;

use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::error::AnalysisError;
use crate::result::AnalysisResult;

/// Render a bar chart comparing the control and treatment rates.
///
/// # Errors
///
/// Returns [`AnalysisError::Artifact`] when the path is not valid UTF-8 or
/// drawing fails.
pub fn render_rate_chart(result: &AnalysisResult, path: &Path) -> Result<(), AnalysisError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| AnalysisError::Artifact(format!("non-UTF-8 chart path: {:?}", path)))?;

    let control_pct = result.metrics.control_rate * 100.0;
    let treatment_pct = result.metrics.treatment_rate * 100.0;
    let y_max = (control_pct.max(treatment_pct) * 1.25).max(1.0);

    let root = SVGBackend::new(path_str, (640, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(artifact)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("A/B test: conversion rate comparison", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..2f64, 0f64..y_max)
        .map_err(artifact)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(2)
        .x_label_formatter(&|x| {
            if *x < 1.0 {
                "Control".to_string()
            } else {
                "Treatment".to_string()
            }
        })
        .y_desc("Conversion rate (%)")
        .draw()
        .map_err(artifact)?;

    chart
        .draw_series([
            Rectangle::new([(0.2, 0.0), (0.8, control_pct)], BLUE.mix(0.6).filled()),
            Rectangle::new([(1.2, 0.0), (1.8, treatment_pct)], RED.mix(0.6).filled()),
        ])
        .map_err(artifact)?;

    root.present().map_err(artifact)
}

fn artifact<E: std::fmt::Display>(err: E) -> AnalysisError {
    AnalysisError::Artifact(err.to_string())
}
