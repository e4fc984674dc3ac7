use crate::data::{CardholderType, CirculationRecord, Year};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeValue {
	pub cardholder_type: CardholderType,
	pub value: u64,
}

/// Circulation of one branch in one year summed over cardholder types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchYearTotal {
	pub branch_code: String,
	pub year: Year,
	pub total: u64,
	/// Per-type breakdown in stacking order, types absent from the data omitted.
	pub types: Vec<TypeValue>,
}

/// A bubble of the cluster view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClusterNode {
	/// A single record, used when one cardholder type is selected.
	Raw(CirculationRecord),
	/// A branch-year sum, used when all types are shown.
	Aggregate(BranchYearTotal),
}

impl ClusterNode {
	pub fn branch_code(&self) -> &str {
		match self {
			Self::Raw(r) => &r.branch_code,
			Self::Aggregate(a) => &a.branch_code,
		}
	}

	pub fn year(&self) -> Year {
		match self {
			Self::Raw(r) => r.year,
			Self::Aggregate(a) => a.year,
		}
	}

	pub fn circulation(&self) -> u64 {
		match self {
			Self::Raw(r) => r.circulation,
			Self::Aggregate(a) => a.total,
		}
	}
}

/// Builds the node set for a type selection: one aggregate per
/// (branch, year) when `ty` is `None`, otherwise one raw node per record.
pub fn build_nodes<'a>(
	records: impl IntoIterator<Item = &'a CirculationRecord>,
	ty: Option<CardholderType>,
) -> Vec<ClusterNode> {
	let records = records.into_iter();
	let Some(ty) = ty else {
		return aggregate_by_branch_year(records)
			.into_iter()
			.map(ClusterNode::Aggregate)
			.collect();
	};
	records
		.filter(|r| r.cardholder_type == ty)
		.cloned()
		.map(ClusterNode::Raw)
		.collect()
}

/// Sums circulation per (branch, year), keeping first-appearance order.
pub fn aggregate_by_branch_year<'a>(
	records: impl IntoIterator<Item = &'a CirculationRecord>,
) -> Vec<BranchYearTotal> {
	let mut totals: Vec<BranchYearTotal> = Vec::new();
	for r in records {
		let idx = match totals
			.iter()
			.position(|t| t.branch_code == r.branch_code && t.year == r.year)
		{
			Some(i) => i,
			None => {
				totals.push(BranchYearTotal {
					branch_code: r.branch_code.clone(),
					year: r.year,
					total: 0,
					types: Vec::new(),
				});
				totals.len() - 1
			}
		};
		let entry = &mut totals[idx];
		entry.total += r.circulation;
		match entry
			.types
			.iter_mut()
			.find(|t| t.cardholder_type == r.cardholder_type)
		{
			Some(t) => t.value += r.circulation,
			None => entry.types.push(TypeValue {
				cardholder_type: r.cardholder_type,
				value: r.circulation,
			}),
		}
	}
	for t in &mut totals {
		t.types.sort_by_key(|v| v.cardholder_type);
	}
	totals
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(code: &str, year: Year, ty: CardholderType, circulation: u64) -> CirculationRecord {
		CirculationRecord {
			branch_code: code.into(),
			year,
			cardholder_type: ty,
			circulation,
		}
	}

	fn sample() -> Vec<CirculationRecord> {
		vec![
			record("AB", Year::Y2022, CardholderType::Adult, 30),
			record("AB", Year::Y2022, CardholderType::Child, 10),
			record("BB", Year::Y2022, CardholderType::Teen, 5),
			record("AB", Year::Y2023, CardholderType::Child, 12),
			record("AB", Year::Y2022, CardholderType::Child, 1),
		]
	}

	#[test]
	fn aggregates_in_first_appearance_order() {
		let totals = aggregate_by_branch_year(&sample());
		assert_eq!(totals.len(), 3);
		assert_eq!(totals[0].branch_code, "AB");
		assert_eq!(totals[0].total, 41);
		assert_eq!(
			totals[0].types,
			vec![
				TypeValue {
					cardholder_type: CardholderType::Child,
					value: 11
				},
				TypeValue {
					cardholder_type: CardholderType::Adult,
					value: 30
				},
			]
		);
		assert_eq!(totals[1].branch_code, "BB");
		assert_eq!(totals[2].year, Year::Y2023);
	}

	#[test]
	fn raw_nodes_for_single_type() {
		let nodes = build_nodes(&sample(), Some(CardholderType::Child));
		assert_eq!(nodes.len(), 3);
		assert!(nodes.iter().all(|n| matches!(n, ClusterNode::Raw(_))));
		assert_eq!(nodes[2].circulation(), 1);
	}

	#[test]
	fn switching_types_back_and_forth_is_stable() {
		let records = sample();
		let first = build_nodes(&records, None);
		let _ = build_nodes(&records, Some(CardholderType::Teen));
		let again = build_nodes(&records, None);
		let _ = build_nodes(&records, Some(CardholderType::Teen));
		assert_eq!(first, again);
		assert_eq!(
			build_nodes(&records, Some(CardholderType::Teen)),
			build_nodes(&records, Some(CardholderType::Teen))
		);
	}
}
