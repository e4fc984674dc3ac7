//! Per-branch yearly visits and registrations charts.

mod component;
mod render;
mod scene;

pub use component::TrendChart;
pub use scene::Metric;
