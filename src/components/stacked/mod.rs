//! Stacked bars of circulation by cardholder type for the busiest branches.

mod aggregate;
pub mod render;
mod scene;

pub use scene::{BarHit, StackedScene};
