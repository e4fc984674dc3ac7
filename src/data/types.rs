use std::fmt;
use std::str::FromStr;

/// Category of library card holder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardholderType {
	Child,
	Teen,
	Adult,
}

impl CardholderType {
	/// Stacking key order.
	pub const ALL: [CardholderType; 3] = [Self::Child, Self::Teen, Self::Adult];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Child => "Child",
			Self::Teen => "Teen",
			Self::Adult => "Adult",
		}
	}

	/// Tableau10 colour used for this type everywhere on the dashboard.
	pub fn color(self) -> &'static str {
		match self {
			Self::Child => "#4e79a7",
			Self::Teen => "#f28e2c",
			Self::Adult => "#e15759",
		}
	}
}

impl fmt::Display for CardholderType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for CardholderType {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"child" | "children" => Ok(Self::Child),
			"teen" | "teens" => Ok(Self::Teen),
			"adult" | "adults" => Ok(Self::Adult),
			_ => Err(()),
		}
	}
}

/// The two reporting years the dashboard compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Year {
	Y2022,
	Y2023,
}

impl Year {
	pub const ALL: [Year; 2] = [Self::Y2022, Self::Y2023];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Y2022 => "2022",
			Self::Y2023 => "2023",
		}
	}

	pub fn index(self) -> usize {
		match self {
			Self::Y2022 => 0,
			Self::Y2023 => 1,
		}
	}
}

impl fmt::Display for Year {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Year {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"2022" => Ok(Self::Y2022),
			"2023" => Ok(Self::Y2023),
			_ => Err(()),
		}
	}
}

/// One row of the circulation-by-cardholder-type dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CirculationRecord {
	pub branch_code: String,
	pub year: Year,
	pub cardholder_type: CardholderType,
	pub circulation: u64,
}

/// The loaded circulation records together with the selector domains.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
	pub records: Vec<CirculationRecord>,
	/// Distinct cardholder types in first-appearance order.
	pub types: Vec<CardholderType>,
	/// Distinct branch codes in first-appearance order.
	pub branches: Vec<String>,
}

impl Dataset {
	/// Drops every record of `excluded_branch` and derives the domains.
	pub fn new(records: Vec<CirculationRecord>, excluded_branch: Option<&str>) -> Self {
		let records: Vec<CirculationRecord> = records
			.into_iter()
			.filter(|r| excluded_branch != Some(r.branch_code.as_str()))
			.collect();

		let mut types = Vec::new();
		let mut branches: Vec<String> = Vec::new();
		for r in &records {
			if !types.contains(&r.cardholder_type) {
				types.push(r.cardholder_type);
			}
			if !branches.iter().any(|b| b == &r.branch_code) {
				branches.push(r.branch_code.clone());
			}
		}

		Self {
			records,
			types,
			branches,
		}
	}
}

/// One row of the branch general information dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchInfo {
	pub code: String,
	pub name: Option<String>,
}

/// Registrations and visits of one branch in one year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnualPoint {
	pub year: i32,
	pub registrations: f64,
	pub visits: f64,
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
	fn parses_types_loosely() {
		assert_eq!(" adult ".parse::<CardholderType>(), Ok(CardholderType::Adult));
		assert_eq!("Children".parse::<CardholderType>(), Ok(CardholderType::Child));
		assert!("Senior".parse::<CardholderType>().is_err());
		assert_eq!("2023".parse::<Year>(), Ok(Year::Y2023));
		assert!("2021".parse::<Year>().is_err());
	}

	#[test]
	fn dataset_excludes_branch_and_keeps_domain_order() {
		let ds = Dataset::new(
			vec![
				record("TRL", Year::Y2022, CardholderType::Teen, 5),
				record("ALL", Year::Y2022, CardholderType::Child, 999),
				record("AB", Year::Y2023, CardholderType::Adult, 7),
				record("TRL", Year::Y2023, CardholderType::Adult, 1),
			],
			Some("ALL"),
		);
		assert_eq!(ds.records.len(), 3);
		assert_eq!(ds.branches, vec!["TRL".to_string(), "AB".to_string()]);
		assert_eq!(ds.types, vec![CardholderType::Teen, CardholderType::Adult]);
	}
}
