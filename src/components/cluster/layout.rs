use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::ClusterNode;
use crate::components::scale::SqrtScale;
use crate::config::ClusterConfig;
use crate::data::Year;

/// A node placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
	pub node: ClusterNode,
	pub radius: f64,
	pub x: f64,
	pub y: f64,
}

/// Horizontal anchor of a year: a quarter and three quarters of the width.
pub fn anchor_x(year: Year, width: f64) -> f64 {
	match year {
		Year::Y2022 => width / 4.0,
		Year::Y2023 => 3.0 * width / 4.0,
	}
}

/// Bubble radius scale for a node set.
pub fn radius_scale(nodes: &[ClusterNode], config: &ClusterConfig) -> SqrtScale {
	let max = nodes.iter().map(ClusterNode::circulation).max().unwrap_or(0);
	SqrtScale::new(max as f64, (config.min_radius, config.max_radius))
}

/// Largest overlap (px) a collision pass may leave behind.
const OVERLAP_TOLERANCE: f64 = 1e-6;
/// Collision passes run once the simulation stops.
const FINAL_PASSES: u32 = 1000;

/// Force layout of one node set.
///
/// Each year has a fixed, massless anchor node; every bubble is linked to
/// its year's anchor so the spring pulls it toward `(anchor_x, height / 2)`
/// while bubbles repel each other. The integration step is scaled by a
/// temperature `alpha` that decays every tick, and collision passes after
/// each step keep bubbles `collision_padding` apart.
pub struct ClusterLayout {
	graph: ForceGraph<Option<usize>, ()>,
	pub bubbles: Vec<Bubble>,
	pub width: f64,
	pub height: f64,
	pub running: bool,
	pub ticks: u32,
	alpha: f64,
	config: ClusterConfig,
}

impl ClusterLayout {
	pub fn new(nodes: Vec<ClusterNode>, width: f64, height: f64, config: &ClusterConfig) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping_factor,
		});
		let cy = height / 2.0;

		let anchors: Vec<DefaultNodeIdx> = Year::ALL
			.iter()
			.map(|&year| {
				graph.add_node(NodeData {
					x: anchor_x(year, width) as f32,
					y: cy as f32,
					mass: 0.0,
					is_anchor: true,
					user_data: None,
				})
			})
			.collect();

		let scale = radius_scale(&nodes, config);
		let golden = PI * (3.0 - 5f64.sqrt());
		let mut per_year = [0usize; 2];
		let mut bubbles = Vec::with_capacity(nodes.len());

		for (i, node) in nodes.into_iter().enumerate() {
			let year = node.year();
			let k = per_year[year.index()];
			per_year[year.index()] += 1;

			let (r, angle) = (10.0 * (0.5 + k as f64).sqrt(), k as f64 * golden);
			let (x, y) = (anchor_x(year, width) + r * angle.cos(), cy + r * angle.sin());
			let radius = scale.apply(node.circulation() as f64);

			let idx = graph.add_node(NodeData {
				x: x as f32,
				y: y as f32,
				mass: (radius / config.min_radius.max(1.0)) as f32,
				is_anchor: false,
				user_data: Some(i),
			});
			graph.add_edge(idx, anchors[year.index()], EdgeData::default());
			bubbles.push(Bubble { node, radius, x, y });
		}

		Self {
			graph,
			bubbles,
			width,
			height,
			running: true,
			ticks: 0,
			alpha: 1.0,
			config: *config,
		}
	}

	/// Advances the simulation one step. Returns whether it is still running.
	///
	/// Settling is judged on the movement of the integration step alone. Once
	/// stopped, the bubbles are relaxed until no pair overlaps.
	pub fn tick(&mut self, dt: f32) -> bool {
		if !self.running {
			return false;
		}
		if self.bubbles.is_empty() {
			self.running = false;
			return false;
		}

		self.graph.update(dt * self.alpha as f32);
		self.alpha -= self.alpha * self.config.alpha_decay;

		let bubbles = &mut self.bubbles;
		let mut moved = 0.0;
		self.graph.visit_nodes(|node| {
			if let Some(i) = node.data.user_data {
				let (x, y) = (node.x() as f64, node.y() as f64);
				moved += (x - bubbles[i].x).hypot(y - bubbles[i].y);
				bubbles[i].x = x;
				bubbles[i].y = y;
			}
		});
		relax(bubbles, self.config.collision_padding, self.config.collision_passes);
		self.sync_graph();

		self.ticks += 1;
		let moved = moved / self.bubbles.len() as f64;
		if moved < self.config.settle_threshold
			|| self.alpha < self.config.alpha_min
			|| self.ticks >= self.config.max_ticks
		{
			self.stop();
		}
		self.running
	}

	fn stop(&mut self) {
		self.running = false;
		relax(&mut self.bubbles, self.config.collision_padding, FINAL_PASSES);
		self.sync_graph();
	}

	fn sync_graph(&mut self) {
		let bubbles = &self.bubbles;
		self.graph.visit_nodes_mut(|node| {
			if let Some(i) = node.data.user_data {
				node.data.x = bubbles[i].x as f32;
				node.data.y = bubbles[i].y as f32;
			}
		});
	}

	/// Index of the topmost bubble under `(x, y)`.
	pub fn bubble_at(&self, x: f64, y: f64) -> Option<usize> {
		self.bubbles
			.iter()
			.rposition(|b| (b.x - x).powi(2) + (b.y - y).powi(2) <= b.radius * b.radius)
	}
}

/// Runs collision passes until none finds an overlap above tolerance or
/// `passes` is exhausted. Returns the worst overlap seen by the last pass.
pub fn relax(bubbles: &mut [Bubble], padding: f64, passes: u32) -> f64 {
	let mut worst = 0.0;
	for _ in 0..passes {
		worst = resolve_collisions(bubbles, padding);
		if worst <= OVERLAP_TOLERANCE {
			break;
		}
	}
	worst
}

/// One pass pushing overlapping bubbles apart along the line between their
/// centres, the smaller one moving further. Returns the largest overlap found.
pub fn resolve_collisions(bubbles: &mut [Bubble], padding: f64) -> f64 {
	let mut worst = 0.0f64;
	for i in 0..bubbles.len() {
		for j in (i + 1)..bubbles.len() {
			let (ri, rj) = (bubbles[i].radius + padding, bubbles[j].radius + padding);
			let min = ri + rj;
			let (mut dx, mut dy) = (bubbles[j].x - bubbles[i].x, bubbles[j].y - bubbles[i].y);
			let mut dist = (dx * dx + dy * dy).sqrt();
			if dist >= min {
				continue;
			}
			worst = worst.max(min - dist);
			if dist < 1e-9 {
				// coincident: separate along a fixed per-pair direction
				let angle = (i * 31 + j * 17) as f64;
				(dx, dy) = (angle.cos() * 1e-6, angle.sin() * 1e-6);
				dist = 1e-6;
			}
			let push = (min - dist) / dist;
			let (wi, wj) = (rj * rj, ri * ri);
			let share_i = wi / (wi + wj);
			bubbles[i].x -= dx * push * share_i;
			bubbles[i].y -= dy * push * share_i;
			bubbles[j].x += dx * push * (1.0 - share_i);
			bubbles[j].y += dy * push * (1.0 - share_i);
		}
	}
	worst
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::cluster::types::{BranchYearTotal, ClusterNode};

	fn node(code: &str, year: Year, total: u64) -> ClusterNode {
		ClusterNode::Aggregate(BranchYearTotal {
			branch_code: code.into(),
			year,
			total,
			types: Vec::new(),
		})
	}

	fn bubble(x: f64, y: f64, radius: f64) -> Bubble {
		Bubble {
			node: node("AB", Year::Y2022, 1),
			radius,
			x,
			y,
		}
	}

	#[test]
	fn radii_follow_sqrt_scale() {
		let layout = ClusterLayout::new(
			vec![node("AB", Year::Y2022, 400), node("BB", Year::Y2023, 100), node("CC", Year::Y2022, 0)],
			800.0,
			500.0,
			&ClusterConfig::default(),
		);
		let radii: Vec<f64> = layout.bubbles.iter().map(|b| b.radius).collect();
		assert_eq!(radii, vec![20.0, 12.0, 4.0]);
	}

	#[test]
	fn collision_separates_a_pair() {
		let mut bubbles = vec![bubble(100.0, 100.0, 10.0), bubble(105.0, 100.0, 5.0)];
		assert!((resolve_collisions(&mut bubbles, 2.0) - 14.0).abs() < 1e-9);
		let d = (bubbles[1].x - bubbles[0].x).hypot(bubbles[1].y - bubbles[0].y);
		assert!((d - 19.0).abs() < 1e-9);
		// the smaller bubble moves further
		assert!(bubbles[1].x - 105.0 > 100.0 - bubbles[0].x);
	}

	#[test]
	fn coincident_bubbles_are_separated() {
		let mut bubbles = vec![bubble(50.0, 50.0, 4.0), bubble(50.0, 50.0, 4.0)];
		resolve_collisions(&mut bubbles, 2.0);
		let d = (bubbles[1].x - bubbles[0].x).hypot(bubbles[1].y - bubbles[0].y);
		assert!(d > 11.9);
	}

	#[test]
	fn years_cluster_around_their_anchors() {
		let nodes: Vec<ClusterNode> = (0..20)
			.flat_map(|i| {
				let code = format!("B{i}");
				[
					node(&code, Year::Y2022, 100 + i * 10),
					node(&code, Year::Y2023, 120 + i * 10),
				]
			})
			.collect();
		let mut layout = ClusterLayout::new(nodes, 900.0, 500.0, &ClusterConfig::default());
		for _ in 0..400 {
			if !layout.tick(0.016) {
				break;
			}
		}
		let mean_x = |year: Year| {
			let xs: Vec<f64> = layout
				.bubbles
				.iter()
				.filter(|b| b.node.year() == year)
				.map(|b| b.x)
				.collect();
			xs.iter().sum::<f64>() / xs.len() as f64
		};
		assert!(mean_x(Year::Y2022) < 450.0);
		assert!(mean_x(Year::Y2023) > 450.0);
		assert!((mean_x(Year::Y2022) - 225.0).abs() < 100.0);
		assert!((mean_x(Year::Y2023) - 675.0).abs() < 100.0);
	}

	#[test]
	fn simulation_stops_eventually() {
		let mut layout = ClusterLayout::new(
			vec![node("AB", Year::Y2022, 10), node("AB", Year::Y2023, 20)],
			400.0,
			300.0,
			&ClusterConfig::default(),
		);
		let mut steps = 0;
		while layout.tick(0.016) {
			steps += 1;
			assert!(steps <= ClusterConfig::default().max_ticks);
		}
		assert!(!layout.running);
		assert!(!layout.tick(0.016));
	}

	#[test]
	fn hit_testing_prefers_topmost() {
		let mut layout = ClusterLayout::new(
			vec![node("AB", Year::Y2022, 10), node("BB", Year::Y2022, 10)],
			400.0,
			300.0,
			&ClusterConfig::default(),
		);
		layout.bubbles[0].x = 10.0;
		layout.bubbles[0].y = 10.0;
		layout.bubbles[1].x = 12.0;
		layout.bubbles[1].y = 10.0;
		assert_eq!(layout.bubble_at(11.0, 10.0), Some(1));
		assert_eq!(layout.bubble_at(300.0, 300.0), None);
	}

	#[test]
	fn crowded_layout_settles_without_overlaps() {
		let nodes: Vec<ClusterNode> = (0..100u64)
			.flat_map(|i| {
				let code = format!("B{i:03}");
				[
					node(&code, Year::Y2022, 1_000 + (i * 7919) % 90_000),
					node(&code, Year::Y2023, 1_000 + (i * 104_729) % 90_000),
				]
			})
			.collect();
		let config = ClusterConfig::default();
		let padding = config.collision_padding;
		let mut layout = ClusterLayout::new(nodes, 920.0, 520.0, &config);
		let mut steps = 0;
		while layout.tick(0.016) {
			steps += 1;
			assert!(steps <= config.max_ticks);
		}
		// cooled down before the hard stop
		assert!(layout.ticks < config.max_ticks);

		let bubbles = &layout.bubbles;
		for i in 0..bubbles.len() {
			for j in (i + 1)..bubbles.len() {
				let (a, b) = (&bubbles[i], &bubbles[j]);
				let d = (a.x - b.x).hypot(a.y - b.y);
				assert!(
					d >= a.radius + b.radius + 2.0 * padding - 0.01,
					"bubbles {i} and {j} overlap: {d} < {}",
					a.radius + b.radius + 2.0 * padding
				);
			}
		}
	}
}
