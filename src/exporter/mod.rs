// file: src/exporter/mod.rs
// description: report sinks module exports
// reference: internal module structure

pub mod chart;
pub mod json;
pub mod publish;
pub mod text;

pub use chart::BarChart;
pub use json::{ExportedReport, JsonExporter};
pub use publish::{PublishOptions, Published, publish};
pub use text::{TextLayout, TextReportWriter};
