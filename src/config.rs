//! Dashboard configuration, provided to the component tree as context.

use leptos::prelude::*;

/// Where the CSV files live, relative to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSources {
	/// Circulation by branch, year and cardholder type.
	pub circulation: String,
	/// Branch codes and names.
	pub branch_info: String,
	/// Annual new card registrations by branch.
	pub registrations: String,
	/// Annual visits by branch.
	pub visits: String,
	/// Branch code dropped from the circulation data on load.
	pub excluded_branch: Option<String>,
}

impl Default for DataSources {
	fn default() -> Self {
		Self {
			circulation: "data/library-circulation-by-cardholder-type.csv".into(),
			branch_info: "data/tpl-branch-general-information-2023.csv".into(),
			registrations: "data/tpl-card-registrations-annual-by-branch.csv".into(),
			visits: "data/tpl-visits-annual-by-branch.csv".into(),
			excluded_branch: Some("ALL".into()),
		}
	}
}

/// Space around the plotting area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
	/// Top inset.
	pub top: f64,
	/// Right inset.
	pub right: f64,
	/// Bottom inset.
	pub bottom: f64,
	/// Left inset.
	pub left: f64,
}

/// Size of the main chart canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSize {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Inset of the plotting area.
	pub margin: Margin,
}

impl ChartSize {
	/// Width of the plotting area.
	pub fn inner_width(&self) -> f64 {
		self.width - self.margin.left - self.margin.right
	}

	/// Height of the plotting area.
	pub fn inner_height(&self) -> f64 {
		self.height - self.margin.top - self.margin.bottom
	}
}

impl Default for ChartSize {
	fn default() -> Self {
		Self {
			width: 960.0,
			height: 600.0,
			margin: Margin {
				top: 40.0,
				right: 20.0,
				bottom: 40.0,
				left: 20.0,
			},
		}
	}
}

/// Bubble sizing and force parameters of the cluster view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterConfig {
	/// Radius of a zero-circulation bubble.
	pub min_radius: f64,
	/// Radius of the busiest bubble.
	pub max_radius: f64,
	/// Extra gap kept around every bubble.
	pub collision_padding: f64,
	/// Mutual repulsion between bubbles.
	pub force_charge: f32,
	/// Pull toward the year anchor.
	pub force_spring: f32,
	/// Clamp on any single force.
	pub force_max: f32,
	/// Velocity gain of the integrator.
	pub node_speed: f32,
	/// Velocity kept from one step to the next.
	pub damping_factor: f32,
	/// Mean per-node movement (px per tick) below which the layout is settled.
	pub settle_threshold: f64,
	/// Fraction by which the simulation cools each tick.
	pub alpha_decay: f64,
	/// Temperature below which the simulation stops.
	pub alpha_min: f64,
	/// Upper bound of collision passes per tick.
	pub collision_passes: u32,
	/// Hard stop for layouts that keep jittering.
	pub max_ticks: u32,
}

impl Default for ClusterConfig {
	fn default() -> Self {
		Self {
			min_radius: 4.0,
			max_radius: 20.0,
			collision_padding: 2.0,
			force_charge: 40.0,
			force_spring: 0.6,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.85,
			settle_threshold: 0.02,
			// cools from 1 to alpha_min in about 300 ticks
			alpha_decay: 1.0 - 0.001f64.powf(1.0 / 300.0),
			alpha_min: 0.001,
			collision_passes: 32,
			max_ticks: 600,
		}
	}
}

/// Everything the dashboard can be tuned with.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
	/// Input files.
	pub sources: DataSources,
	/// Main chart size.
	pub chart: ChartSize,
	/// Cluster view layout.
	pub cluster: ClusterConfig,
	/// Number of branches shown in the stacked view.
	pub stacked_top_n: usize,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			sources: DataSources::default(),
			chart: ChartSize::default(),
			cluster: ClusterConfig::default(),
			stacked_top_n: 10,
		}
	}
}

/// The configuration in context, or the defaults when none was provided.
pub(crate) fn use_config() -> DashboardConfig {
	use_context::<DashboardConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_describe_the_dashboard() {
		let config = DashboardConfig::default();
		assert_eq!(config.chart.inner_width(), 920.0);
		assert_eq!(config.chart.inner_height(), 520.0);
		assert_eq!(config.stacked_top_n, 10);
		assert_eq!(config.sources.excluded_branch.as_deref(), Some("ALL"));
	}

	#[test]
	fn cooling_reaches_alpha_min_before_the_tick_cap() {
		let cluster = ClusterConfig::default();
		let mut alpha = 1.0;
		let mut ticks = 0;
		while alpha >= cluster.alpha_min {
			alpha -= alpha * cluster.alpha_decay;
			ticks += 1;
		}
		assert!((299..=302).contains(&ticks));
		assert!(ticks < cluster.max_ticks);
	}
}
