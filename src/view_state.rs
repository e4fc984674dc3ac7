//! Dashboard selection state and its transitions.

use log::debug;

use crate::data::CardholderType;

/// Sentinel value of the selector controls meaning "no filter".
pub const ALL: &str = "All";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
	#[default]
	Cluster,
	Stacked,
}

impl ViewMode {
	pub fn toggled(self) -> Self {
		match self {
			Self::Cluster => Self::Stacked,
			Self::Stacked => Self::Cluster,
		}
	}

	/// Label of the button that switches away from this mode.
	pub fn toggle_label(self) -> &'static str {
		match self {
			Self::Cluster => "Show stacked bars",
			Self::Stacked => "Show clusters",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
	#[default]
	All,
	Only(CardholderType),
}

impl TypeFilter {
	/// Parses a selector value; anything unrecognised means all types.
	pub fn from_value(value: &str) -> Self {
		value.parse().map(Self::Only).unwrap_or(Self::All)
	}

	pub fn value(self) -> &'static str {
		match self {
			Self::All => ALL,
			Self::Only(t) => t.as_str(),
		}
	}

	pub fn cardholder_type(self) -> Option<CardholderType> {
		match self {
			Self::All => None,
			Self::Only(t) => Some(t),
		}
	}
}

/// Which branches are emphasised on the chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BranchFilter {
	#[default]
	All,
	Branches(Vec<String>),
}

impl BranchFilter {
	pub fn from_value(value: &str) -> Self {
		let value = value.trim();
		if value.is_empty() || value == ALL {
			Self::All
		} else {
			Self::Branches(vec![value.to_string()])
		}
	}

	/// An empty code list resets to `All`.
	pub fn from_codes(codes: &[String]) -> Self {
		if codes.is_empty() {
			Self::All
		} else {
			Self::Branches(codes.to_vec())
		}
	}

	pub fn matches(&self, code: &str) -> bool {
		match self {
			Self::All => true,
			Self::Branches(codes) => codes.iter().any(|c| c == code),
		}
	}

	/// The branch when exactly one is selected.
	pub fn single(&self) -> Option<&str> {
		match self {
			Self::Branches(codes) if codes.len() == 1 => Some(&codes[0]),
			_ => None,
		}
	}

	/// Value for the branch selector control.
	pub fn value(&self) -> &str {
		self.single().unwrap_or(ALL)
	}
}

/// What a transition requires of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
	Nothing,
	/// Restyle the existing nodes only.
	Highlight,
	/// Discard the current nodes and rebuild from the dataset.
	Rebuild,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
	pub mode: ViewMode,
	pub type_filter: TypeFilter,
	pub branch_filter: BranchFilter,
	/// Bumped on every transition that needs a rebuild.
	pub generation: u32,
}

impl ViewState {
	pub fn select_type(&mut self, type_filter: TypeFilter) -> Redraw {
		if self.type_filter == type_filter {
			return Redraw::Nothing;
		}
		debug!("type filter {:?} -> {:?}", self.type_filter, type_filter);
		self.type_filter = type_filter;
		self.rebuild()
	}

	pub fn select_branches(&mut self, branch_filter: BranchFilter) -> Redraw {
		if self.branch_filter == branch_filter {
			return Redraw::Nothing;
		}
		debug!("branch filter {:?} -> {:?}", self.branch_filter, branch_filter);
		self.branch_filter = branch_filter;
		Redraw::Highlight
	}

	pub fn toggle_mode(&mut self) -> Redraw {
		self.mode = self.mode.toggled();
		debug!("view mode -> {:?}", self.mode);
		self.rebuild()
	}

	fn rebuild(&mut self) -> Redraw {
		self.generation = self.generation.wrapping_add(1);
		Redraw::Rebuild
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initial_state() {
		let s = ViewState::default();
		assert_eq!(s.mode, ViewMode::Cluster);
		assert_eq!(s.type_filter, TypeFilter::All);
		assert_eq!(s.branch_filter, BranchFilter::All);
	}

	#[test]
	fn type_change_rebuilds_and_keeps_branch() {
		let mut s = ViewState::default();
		s.select_branches(BranchFilter::from_value("AB"));
		let generation = s.generation;
		assert_eq!(
			s.select_type(TypeFilter::from_value("Teen")),
			Redraw::Rebuild
		);
		assert_eq!(s.generation, generation + 1);
		assert_eq!(s.branch_filter.single(), Some("AB"));
		assert_eq!(s.select_type(TypeFilter::Only(CardholderType::Teen)), Redraw::Nothing);
	}

	#[test]
	fn branch_change_only_highlights() {
		let mut s = ViewState::default();
		assert_eq!(s.select_branches(BranchFilter::from_value("BB")), Redraw::Highlight);
		assert_eq!(s.generation, 0);
		assert_eq!(s.select_branches(BranchFilter::from_value(ALL)), Redraw::Highlight);
		assert_eq!(s.branch_filter, BranchFilter::All);
	}

	#[test]
	fn toggle_preserves_selection() {
		let mut s = ViewState::default();
		s.select_type(TypeFilter::Only(CardholderType::Adult));
		s.select_branches(BranchFilter::from_value("AB"));
		assert_eq!(s.toggle_mode(), Redraw::Rebuild);
		assert_eq!(s.mode, ViewMode::Stacked);
		assert_eq!(s.type_filter.value(), "Adult");
		assert_eq!(s.branch_filter.value(), "AB");
		s.toggle_mode();
		assert_eq!(s.mode, ViewMode::Cluster);
	}

	#[test]
	fn branch_filter_from_codes() {
		assert_eq!(BranchFilter::from_codes(&[]), BranchFilter::All);
		let f = BranchFilter::from_codes(&["LB".into(), "HB".into()]);
		assert!(f.matches("HB"));
		assert!(!f.matches("AD"));
		assert_eq!(f.single(), None);
		assert_eq!(f.value(), ALL);
	}
}
