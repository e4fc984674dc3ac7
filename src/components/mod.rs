pub mod chart;
pub mod cluster;
pub mod postal;
pub mod scale;
pub mod stacked;
pub mod trend;
