use log::info;

use crate::components::cluster::{ClusterLayout, ClusterNode, build_nodes};
use crate::components::stacked::{BarHit, StackedScene};
use crate::config::{ChartSize, ClusterConfig};
use crate::data::{Dataset, format_thousands};
use crate::view_state::{BranchFilter, TypeFilter};

/// What is currently drawn in the chart area.
pub enum Scene {
	Cluster(ClusterLayout),
	Stacked(StackedScene),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
	Bubble(usize),
	Bar(BarHit),
}

/// Everything the frame loop needs. Replaced wholesale on every rebuild,
/// which drops the previous simulation.
pub struct ChartState {
	pub scene: Scene,
	pub filter: BranchFilter,
	pub size: ChartSize,
	pub hover: Option<HoverTarget>,
	/// 0..1 progress of the dimming fade after a filter change.
	pub highlight_t: f64,
}

impl ChartState {
	pub fn cluster(
		dataset: &Dataset,
		type_filter: TypeFilter,
		filter: BranchFilter,
		size: ChartSize,
		config: &ClusterConfig,
	) -> Self {
		let nodes: Vec<ClusterNode> = build_nodes(&dataset.records, type_filter.cardholder_type());
		info!(
			"cluster rebuild: {} nodes for {}",
			nodes.len(),
			type_filter.value()
		);
		let layout = ClusterLayout::new(nodes, size.inner_width(), size.inner_height(), config);
		Self::with_scene(Scene::Cluster(layout), filter, size)
	}

	/// The stacked view always covers every cardholder type.
	pub fn stacked(dataset: &Dataset, filter: BranchFilter, size: ChartSize, top_n: usize) -> Self {
		let scene = StackedScene::new(
			&dataset.records,
			top_n,
			size.inner_width(),
			size.inner_height(),
		);
		info!("stacked rebuild: top {} branches", scene.stacks.len());
		Self::with_scene(Scene::Stacked(scene), filter, size)
	}

	fn with_scene(scene: Scene, filter: BranchFilter, size: ChartSize) -> Self {
		Self {
			scene,
			filter,
			size,
			hover: None,
			highlight_t: 1.0,
		}
	}

	/// Restyles without touching the layout.
	pub fn set_filter(&mut self, filter: BranchFilter) {
		if self.filter == filter {
			return;
		}
		self.filter = filter;
		self.highlight_t = 0.0;
	}

	pub fn tick(&mut self, dt: f32) {
		if let Scene::Cluster(layout) = &mut self.scene {
			layout.tick(dt);
		}
		self.highlight_t = (self.highlight_t + (1.0 - self.highlight_t) * 4.0 * dt as f64).min(1.0);
		if self.highlight_t > 0.99 {
			self.highlight_t = 1.0;
		}
	}

	/// Converts canvas coordinates into the translated chart area.
	pub fn to_inner(&self, x: f64, y: f64) -> (f64, f64) {
		(x - self.size.margin.left, y - self.size.margin.top)
	}

	pub fn target_at(&self, x: f64, y: f64) -> Option<HoverTarget> {
		let (ix, iy) = self.to_inner(x, y);
		match &self.scene {
			Scene::Cluster(layout) => layout.bubble_at(ix, iy).map(HoverTarget::Bubble),
			Scene::Stacked(scene) => scene.hit(ix, iy).map(HoverTarget::Bar),
		}
	}

	/// Tooltip lines for a hovered element.
	pub fn tooltip(&self, target: HoverTarget) -> Vec<(String, String)> {
		match (&self.scene, target) {
			(Scene::Cluster(layout), HoverTarget::Bubble(i)) => {
				let Some(bubble) = layout.bubbles.get(i) else {
					return Vec::new();
				};
				match &bubble.node {
					ClusterNode::Raw(r) => vec![
						("Branch".into(), r.branch_code.clone()),
						("Year".into(), r.year.to_string()),
						("Cardholder".into(), r.cardholder_type.to_string()),
						("Circulation".into(), format_thousands(r.circulation as f64)),
					],
					ClusterNode::Aggregate(a) => {
						let mut lines = vec![
							("Branch".into(), a.branch_code.clone()),
							("Year".into(), a.year.to_string()),
							("Circulation".into(), format_thousands(a.total as f64)),
						];
						lines.extend(a.types.iter().map(|t| {
							(
								t.cardholder_type.to_string(),
								format_thousands(t.value as f64),
							)
						}));
						lines
					}
				}
			}
			(Scene::Stacked(scene), HoverTarget::Bar(hit)) => {
				let Some(stack) = scene.stacks.get(hit.stack) else {
					return Vec::new();
				};
				let bar = &stack.bars[hit.year.index()];
				let mut lines = vec![
					("Branch".into(), stack.branch_code.clone()),
					("Year".into(), hit.year.to_string()),
				];
				match hit.cardholder_type {
					Some(ty) => {
						lines.push(("Cardholder".into(), ty.to_string()));
						lines.push((
							"Circulation".into(),
							format_thousands(bar.sums.get(ty) as f64),
						));
					}
					None => lines.push((
						"Circulation".into(),
						format_thousands(bar.sums.total() as f64),
					)),
				}
				lines
			}
			_ => Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{CardholderType, CirculationRecord, Year};

	fn dataset() -> Dataset {
		let mut records = Vec::new();
		for (code, base) in [("AB", 100), ("BB", 40)] {
			for (year, bump) in [(Year::Y2022, 0), (Year::Y2023, 50)] {
				for ty in CardholderType::ALL {
					records.push(CirculationRecord {
						branch_code: code.into(),
						year,
						cardholder_type: ty,
						circulation: base + bump,
					});
				}
			}
		}
		Dataset::new(records, None)
	}

	#[test]
	fn highlight_change_keeps_layout() {
		let ds = dataset();
		let mut state = ChartState::cluster(
			&ds,
			TypeFilter::All,
			BranchFilter::All,
			ChartSize::default(),
			&ClusterConfig::default(),
		);
		for _ in 0..5 {
			state.tick(0.016);
		}
		let Scene::Cluster(layout) = &state.scene else {
			panic!("expected cluster scene");
		};
		let before = layout.bubbles.clone();

		state.set_filter(BranchFilter::from_value("AB"));
		assert_eq!(state.highlight_t, 0.0);
		let Scene::Cluster(layout) = &state.scene else {
			panic!("expected cluster scene");
		};
		assert_eq!(layout.bubbles, before);
		assert_eq!(layout.bubbles.len(), 4);
	}

	#[test]
	fn type_filter_selects_raw_nodes() {
		let state = ChartState::cluster(
			&dataset(),
			TypeFilter::Only(CardholderType::Teen),
			BranchFilter::All,
			ChartSize::default(),
			&ClusterConfig::default(),
		);
		let Scene::Cluster(layout) = &state.scene else {
			panic!("expected cluster scene");
		};
		assert!(
			layout
				.bubbles
				.iter()
				.all(|b| matches!(&b.node, ClusterNode::Raw(r) if r.cardholder_type == CardholderType::Teen))
		);
		let lines = state.tooltip(HoverTarget::Bubble(0));
		assert_eq!(lines[0], ("Branch".to_string(), "AB".to_string()));
		assert_eq!(lines[2], ("Cardholder".to_string(), "Teen".to_string()));
	}

	#[test]
	fn stacked_tooltip_reports_totals() {
		let state = ChartState::stacked(&dataset(), BranchFilter::All, ChartSize::default(), 10);
		let lines = state.tooltip(HoverTarget::Bar(BarHit {
			stack: 0,
			year: Year::Y2023,
			cardholder_type: None,
		}));
		assert_eq!(lines[0].1, "AB");
		assert_eq!(lines[2], ("Circulation".to_string(), "450".to_string()));
	}
}
