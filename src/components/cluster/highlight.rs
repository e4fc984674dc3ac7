use super::layout::Bubble;
use crate::data::Year;
use crate::view_state::BranchFilter;

pub const DEFAULT_STROKE: f64 = 1.2;
pub const SELECTED_STROKE: f64 = 3.0;
pub const DIMMED_STROKE: f64 = 0.5;
pub const DIMMED_OPACITY: f64 = 0.25;

const INCREASE_COLOR: &str = "#2ca02c";
const DECREASE_COLOR: &str = "#d62728";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub stroke_width: f64,
	pub opacity: f64,
}

/// Stroke and opacity of a bubble under the current branch filter.
pub fn node_style(filter: &BranchFilter, branch_code: &str) -> NodeStyle {
	match filter {
		BranchFilter::All => NodeStyle {
			stroke_width: DEFAULT_STROKE,
			opacity: 1.0,
		},
		f if f.matches(branch_code) => NodeStyle {
			stroke_width: SELECTED_STROKE,
			opacity: 1.0,
		},
		_ => NodeStyle {
			stroke_width: DIMMED_STROKE,
			opacity: DIMMED_OPACITY,
		},
	}
}

/// Year-over-year change in percent; 0 when there is no baseline.
pub fn percent_change(before: u64, after: u64) -> f64 {
	if before == 0 {
		return 0.0;
	}
	(after as f64 - before as f64) / before as f64 * 100.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
	Increase,
	Decrease,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annotation {
	pub x: f64,
	pub y: f64,
	pub percent: f64,
}

impl Annotation {
	pub fn trend(&self) -> Trend {
		if self.percent < 0.0 {
			Trend::Decrease
		} else {
			Trend::Increase
		}
	}

	pub fn color(&self) -> &'static str {
		match self.trend() {
			Trend::Increase => INCREASE_COLOR,
			Trend::Decrease => DECREASE_COLOR,
		}
	}

	pub fn label(&self) -> String {
		format!("{:+.1}%", self.percent)
	}
}

/// Change annotation for a single selected branch.
///
/// Requires the branch to resolve to exactly one 2022 and one 2023 bubble;
/// anything else yields `None`. Placed at the midpoint of the two bubbles'
/// current positions.
pub fn annotation(filter: &BranchFilter, bubbles: &[Bubble]) -> Option<Annotation> {
	let code = filter.single()?;
	let matched: Vec<&Bubble> = bubbles
		.iter()
		.filter(|b| b.node.branch_code() == code)
		.collect();
	let [a, b] = matched.as_slice() else {
		return None;
	};
	let (old, new) = match (a.node.year(), b.node.year()) {
		(Year::Y2022, Year::Y2023) => (a, b),
		(Year::Y2023, Year::Y2022) => (b, a),
		_ => return None,
	};
	Some(Annotation {
		x: (old.x + new.x) / 2.0,
		y: (old.y + new.y) / 2.0,
		percent: percent_change(old.node.circulation(), new.node.circulation()),
	})
}
