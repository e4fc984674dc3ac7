//! Force-directed bubble clusters of branch circulation by year.

pub mod highlight;
mod layout;
pub mod render;
mod types;

pub use layout::ClusterLayout;
pub use types::{ClusterNode, build_nodes};
