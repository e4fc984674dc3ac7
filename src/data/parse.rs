//! CSV decoding and type coercion for the four input files.

use log::warn;
use serde::Deserialize;

use super::error::DataError;
use super::types::{BranchInfo, CardholderType, CirculationRecord, Year};

#[derive(Debug, Deserialize)]
struct CirculationRow {
	#[serde(rename = "BranchCode", default)]
	branch_code: Option<String>,
	#[serde(rename = "Year", default)]
	year: Option<String>,
	#[serde(rename = "CardholderType", default)]
	cardholder_type: Option<String>,
	#[serde(rename = "Circulation", default)]
	circulation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BranchRow {
	#[serde(rename = "BranchCode", default)]
	code: Option<String>,
	#[serde(rename = "BranchName", default)]
	name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnnualRow {
	#[serde(rename = "BranchCode", default)]
	branch_code: Option<String>,
	#[serde(rename = "Year", default)]
	year: Option<String>,
	#[serde(rename = "Registrations", alias = "Visits", default)]
	value: Option<String>,
}

/// Registrations or visits of one branch in one year.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnualCount {
	pub branch_code: String,
	pub year: i32,
	pub value: f64,
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
	csv::ReaderBuilder::new()
		.trim(csv::Trim::All)
		.flexible(true)
		.from_reader(text.as_bytes())
}

fn non_blank(value: Option<String>) -> Option<String> {
	value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parses a circulation count the way a spreadsheet export writes it:
/// optional thousands separators, optionally with a `.0` fraction.
fn parse_circulation(raw: &str) -> Option<u64> {
	let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '_').collect();
	if cleaned.is_empty() {
		return Some(0);
	}
	let value: f64 = cleaned.parse().ok()?;
	(value.is_finite() && value >= 0.0).then(|| value.round() as u64)
}

/// Decodes the circulation-by-cardholder-type CSV.
///
/// Rows outside the two reporting years, with an unknown cardholder type or
/// without a branch code are skipped with a warning. A circulation value
/// that is not a non-negative number fails the whole load.
pub fn parse_circulation_csv(
	source_name: &str,
	text: &str,
) -> Result<Vec<CirculationRecord>, DataError> {
	let mut records = Vec::new();
	for (i, row) in reader(text).deserialize::<CirculationRow>().enumerate() {
		let line = i + 2;
		let row = row.map_err(|e| DataError::csv(source_name, e))?;

		let Some(branch_code) = non_blank(row.branch_code) else {
			warn!("{source_name} row {line}: missing BranchCode, skipped");
			continue;
		};
		let raw_year = row.year.unwrap_or_default();
		let Ok(year) = raw_year.parse::<Year>() else {
			warn!("{source_name} row {line}: year {raw_year:?} outside the reporting years, skipped");
			continue;
		};
		let raw_type = row.cardholder_type.unwrap_or_default();
		let Ok(cardholder_type) = raw_type.parse::<CardholderType>() else {
			warn!("{source_name} row {line}: unknown cardholder type {raw_type:?}, skipped");
			continue;
		};
		let raw_circulation = row.circulation.unwrap_or_default();
		let circulation =
			parse_circulation(raw_circulation.trim()).ok_or_else(|| DataError::InvalidField {
				source_name: source_name.to_string(),
				row: line,
				field: "Circulation",
				value: raw_circulation.clone(),
			})?;

		records.push(CirculationRecord {
			branch_code,
			year,
			cardholder_type,
			circulation,
		});
	}
	Ok(records)
}

/// Decodes the branch general information CSV. Rows without a code are
/// dropped; a missing name is kept as `None`.
pub fn parse_branch_csv(source_name: &str, text: &str) -> Result<Vec<BranchInfo>, DataError> {
	let mut branches = Vec::new();
	for (i, row) in reader(text).deserialize::<BranchRow>().enumerate() {
		let row = row.map_err(|e| DataError::csv(source_name, e))?;
		let Some(code) = non_blank(row.code) else {
			warn!("{source_name} row {}: missing BranchCode, skipped", i + 2);
			continue;
		};
		branches.push(BranchInfo {
			code,
			name: non_blank(row.name),
		});
	}
	Ok(branches)
}

/// Decodes an annual registrations or visits CSV keyed by branch and year.
///
/// Rows with a blank or non-numeric year or value are skipped with a
/// warning, so a gap in one year leaves the other years intact.
pub fn parse_annual_csv(source_name: &str, text: &str) -> Result<Vec<AnnualCount>, DataError> {
	let mut counts = Vec::new();
	for (i, row) in reader(text).deserialize::<AnnualRow>().enumerate() {
		let line = i + 2;
		let row = row.map_err(|e| DataError::csv(source_name, e))?;

		let Some(branch_code) = non_blank(row.branch_code) else {
			warn!("{source_name} row {line}: missing BranchCode, skipped");
			continue;
		};
		let year = non_blank(row.year).and_then(|y| y.parse::<i32>().ok());
		let value = non_blank(row.value)
			.and_then(|v| v.replace(',', "").parse::<f64>().ok())
			.filter(|v| v.is_finite());
		let (Some(year), Some(value)) = (year, value) else {
			warn!("{source_name} row {line}: missing year or value for {branch_code}, skipped");
			continue;
		};
		counts.push(AnnualCount {
			branch_code,
			year,
			value,
		});
	}
	Ok(counts)
}
