use crate::data::{CardholderType, CirculationRecord, Year};

/// Circulation of one branch in one year split by cardholder type, indexed
/// in [`CardholderType::ALL`] order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeSums(pub [u64; 3]);

impl TypeSums {
	pub fn get(&self, ty: CardholderType) -> u64 {
		self.0[type_index(ty)]
	}

	pub fn total(&self) -> u64 {
		self.0.iter().sum()
	}
}

fn type_index(ty: CardholderType) -> usize {
	match ty {
		CardholderType::Child => 0,
		CardholderType::Teen => 1,
		CardholderType::Adult => 2,
	}
}

/// One stacked segment: `[y0, y1]` in circulation units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
	pub cardholder_type: CardholderType,
	pub y0: u64,
	pub y1: u64,
}

impl Band {
	pub fn height(&self) -> u64 {
		self.y1 - self.y0
	}
}

/// The bar of one branch in one year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackedBar {
	pub year: Year,
	pub sums: TypeSums,
	pub bands: Vec<Band>,
}

/// All bars of one of the top branches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchStack {
	pub branch_code: String,
	/// Circulation summed over both years and all types.
	pub total: u64,
	/// One bar per year, 2022 first.
	pub bars: Vec<StackedBar>,
}

/// Year × branch × type cube, branches in first-appearance order.
pub fn circulation_cube<'a>(
	records: impl IntoIterator<Item = &'a CirculationRecord>,
) -> Vec<(String, [TypeSums; 2])> {
	let mut cube: Vec<(String, [TypeSums; 2])> = Vec::new();
	for r in records {
		let idx = match cube.iter().position(|(code, _)| *code == r.branch_code) {
			Some(i) => i,
			None => {
				cube.push((r.branch_code.clone(), Default::default()));
				cube.len() - 1
			}
		};
		cube[idx].1[r.year.index()].0[type_index(r.cardholder_type)] += r.circulation;
	}
	cube
}

/// Cumulative bands over the fixed key order Child, Teen, Adult.
pub fn stack(sums: &TypeSums) -> Vec<Band> {
	let mut y0 = 0;
	CardholderType::ALL
		.iter()
		.map(|&ty| {
			let y1 = y0 + sums.get(ty);
			let band = Band {
				cardholder_type: ty,
				y0,
				y1,
			};
			y0 = y1;
			band
		})
		.collect()
}

/// The `n` branches with the highest two-year circulation, highest first.
/// Ties keep first-appearance order.
pub fn top_branches<'a>(
	records: impl IntoIterator<Item = &'a CirculationRecord>,
	n: usize,
) -> Vec<BranchStack> {
	let mut stacks: Vec<BranchStack> = circulation_cube(records)
		.into_iter()
		.map(|(branch_code, years)| BranchStack {
			total: years.iter().map(TypeSums::total).sum(),
			bars: Year::ALL
				.iter()
				.map(|&year| {
					let sums = years[year.index()];
					StackedBar {
						year,
						sums,
						bands: stack(&sums),
					}
				})
				.collect(),
			branch_code,
		})
		.collect();
	// stable: equal totals stay in enumeration order
	stacks.sort_by(|a, b| b.total.cmp(&a.total));
	stacks.truncate(n);
	stacks
}

/// Largest bar height, for the y domain.
pub fn max_bar(stacks: &[BranchStack]) -> u64 {
	stacks
		.iter()
		.flat_map(|s| s.bars.iter())
		.map(|b| b.sums.total())
		.max()
		.unwrap_or(0)
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

	#[test]
	fn bands_stack_in_key_order() {
		let bands = stack(&TypeSums([5, 3, 10]));
		assert_eq!(
			bands
				.iter()
				.map(|b| (b.cardholder_type, b.y0, b.y1))
				.collect::<Vec<_>>(),
			vec![
				(CardholderType::Child, 0, 5),
				(CardholderType::Teen, 5, 8),
				(CardholderType::Adult, 8, 18),
			]
		);
		assert_eq!(bands[2].height(), 10);
	}

	#[test]
	fn keeps_exactly_top_ten_with_stable_ties() {
		// B0..B11 with totals 10, 20, ..., except B3 and B7 tie at 500
		let mut records = Vec::new();
		for i in 0..12u64 {
			let total = match i {
				3 | 7 => 500,
				_ => (i + 1) * 10,
			};
			records.push(record(&format!("B{i}"), Year::Y2022, CardholderType::Adult, total / 2));
			records.push(record(
				&format!("B{i}"),
				Year::Y2023,
				CardholderType::Child,
				total - total / 2,
			));
		}
		let top = top_branches(&records, 10);
		assert_eq!(top.len(), 10);
		let codes: Vec<&str> = top.iter().map(|s| s.branch_code.as_str()).collect();
		assert_eq!(
			codes,
			vec!["B3", "B7", "B11", "B10", "B9", "B8", "B6", "B5", "B4", "B2"]
		);
		assert_eq!(top[0].total, 500);
		assert_eq!(top[0].bars[0].sums.get(CardholderType::Adult), 250);
		assert_eq!(top[0].bars[1].sums.get(CardholderType::Child), 250);
	}

	#[test]
	fn fewer_branches_than_n() {
		let records = vec![
			record("AB", Year::Y2022, CardholderType::Teen, 4),
			record("AB", Year::Y2022, CardholderType::Teen, 6),
		];
		let top = top_branches(&records, 10);
		assert_eq!(top.len(), 1);
		assert_eq!(top[0].bars[0].sums, TypeSums([0, 10, 0]));
		assert_eq!(top[0].bars[1].sums.total(), 0);
		assert_eq!(max_bar(&top), 10);
	}
}
