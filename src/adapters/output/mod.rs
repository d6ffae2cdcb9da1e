//! Output Adapters - File-based Chart Rendering
//!
//! Implements the `ChartSink` port by writing one static JSON
//! document per chart.

pub mod json_chart;

pub use json_chart::JsonChartWriter;
