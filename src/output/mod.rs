//! Result presentation: terminal report, JSON, CSV export, and chart.

pub mod chart;
pub mod csv;
pub mod json;
pub mod terminal;
