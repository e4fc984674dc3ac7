use super::table::{BRANCH_NAMES, POSTAL_PREFIXES};

/// First three characters of a postal code, upper-cased.
fn postal_prefix(postal: &str) -> Option<String> {
	let postal = postal.trim();
	if postal.chars().count() < 3 {
		return None;
	}
	Some(postal.chars().take(3).collect::<String>().to_uppercase())
}

pub fn branch_name(code: &str) -> Option<&'static str> {
	BRANCH_NAMES
		.iter()
		.find(|(c, _)| *c == code)
		.map(|(_, name)| *name)
}

/// Branch codes near `postal`, in declaration order.
///
/// Every declaration of the prefix contributes, so a prefix listed twice
/// yields the codes of both entries. Inputs shorter than three characters
/// and unknown prefixes give an empty list.
pub fn branch_codes_for_postal(postal: &str) -> Vec<&'static str> {
	let Some(prefix) = postal_prefix(postal) else {
		return Vec::new();
	};
	let mut codes: Vec<&'static str> = Vec::new();
	for (_, list) in POSTAL_PREFIXES.iter().filter(|(p, _)| *p == prefix) {
		for code in list.iter() {
			if !codes.contains(code) {
				codes.push(*code);
			}
		}
	}
	codes
}

/// Names of the branches near `postal`; codes without a known name are dropped.
pub fn branch_names_for_postal(postal: &str) -> Vec<&'static str> {
	branch_codes_for_postal(postal)
		.into_iter()
		.filter_map(branch_name)
		.collect()
}

/// Prefixes that appear more than once in the table.
pub fn duplicate_prefixes() -> Vec<&'static str> {
	let mut seen: Vec<&'static str> = Vec::new();
	let mut dupes = Vec::new();
	for (prefix, _) in POSTAL_PREFIXES {
		if seen.contains(prefix) {
			if !dupes.contains(prefix) {
				dupes.push(*prefix);
			}
		} else {
			seen.push(*prefix);
		}
	}
	dupes
}

/// Relative link to the detail page of a branch.
pub fn branch_link(code: &str) -> String {
	format!("branch.html?branch={code}")
}

/// Outcome of a postal code search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostalSearch {
	NoMatch,
	/// `(code, label)` pairs; the label falls back to the code.
	Found(Vec<(String, String)>),
}

impl PostalSearch {
	pub const NO_MATCH_TEXT: &'static str = "No branch found for this postal code.";

	pub fn run(postal: &str) -> Self {
		let codes = branch_codes_for_postal(postal);
		if codes.is_empty() {
			return Self::NoMatch;
		}
		Self::Found(
			codes
				.into_iter()
				.map(|code| {
					(
						code.to_string(),
						branch_name(code).unwrap_or(code).to_string(),
					)
				})
				.collect(),
		)
	}

	pub fn codes(&self) -> Vec<String> {
		match self {
			Self::NoMatch => Vec::new(),
			Self::Found(found) => found.iter().map(|(code, _)| code.clone()).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_prefix_returns_declared_order() {
		assert_eq!(branch_codes_for_postal("M4K 1N2"), vec!["PD", "RV", "TR"]);
		assert_eq!(branch_codes_for_postal("m9w"), vec!["HW", "NE", "RX"]);
		assert_eq!(
			branch_names_for_postal("M4W"),
			vec!["Toronto Reference Library", "Yorkville"]
		);
	}

	#[test]
	fn prefix_needs_three_chars() {
		assert_eq!(postal_prefix(" m5v 3l9"), Some("M5V".into()));
		assert_eq!(postal_prefix("M5"), None);
	}

	#[test]
	fn short_or_unknown_input_is_empty() {
		assert!(branch_codes_for_postal("M4").is_empty());
		assert!(branch_codes_for_postal("  ").is_empty());
		assert!(branch_codes_for_postal("K1A 0B1").is_empty());
		assert_eq!(PostalSearch::run("M4"), PostalSearch::NoMatch);
	}

	#[test]
	fn repeated_prefix_merges_declarations() {
		assert_eq!(duplicate_prefixes(), vec!["M8W"]);
		assert_eq!(branch_codes_for_postal("M8W 2A1"), vec!["LB", "HB", "AD"]);
	}

	#[test]
	fn unnamed_codes_fall_back_to_code() {
		assert!(branch_names_for_postal("M4X").is_empty());
		let search = PostalSearch::run("M4X 1A1");
		assert_eq!(
			search,
			PostalSearch::Found(vec![("SJT".to_string(), "SJT".to_string())])
		);
		assert_eq!(search.codes(), vec!["SJT".to_string()]);
		assert_eq!(branch_link("SJT"), "branch.html?branch=SJT");
	}
}
