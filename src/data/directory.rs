use std::collections::HashMap;

use log::warn;

use super::types::BranchInfo;

/// Branch names from the general information file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BranchDirectory {
	names: HashMap<String, String>,
}

impl BranchDirectory {
	pub fn new(branches: &[BranchInfo]) -> Self {
		let mut names = HashMap::with_capacity(branches.len());
		for b in branches {
			match &b.name {
				Some(name) => {
					names.insert(b.code.clone(), name.clone());
				}
				None => warn!("branch {} has no name", b.code),
			}
		}
		Self { names }
	}

	pub fn name(&self, code: &str) -> Option<&str> {
		self.names.get(code).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn info(code: &str, name: Option<&str>) -> BranchInfo {
		BranchInfo {
			code: code.into(),
			name: name.map(Into::into),
		}
	}

	#[test]
	fn nameless_branches_stay_out() {
		let dir = BranchDirectory::new(&[
			info("LB", Some("Long Branch")),
			info("AC", None),
			info("YO", Some("Yorkville")),
		]);
		assert_eq!(dir.name("LB"), Some("Long Branch"));
		assert_eq!(dir.name("YO"), Some("Yorkville"));
		assert_eq!(dir.name("AC"), None);
		assert_eq!(dir.name("ZZ"), None);
	}
}
