use gloo_net::http::Request;
use log::{debug, info};

use super::annual::merge_annual;
use super::directory::BranchDirectory;
use super::error::DataError;
use super::parse::{parse_annual_csv, parse_branch_csv, parse_circulation_csv};
use super::types::{AnnualPoint, Dataset};
use crate::config::DataSources;

/// GETs `url` relative to the page and returns the body text.
pub async fn fetch_text(url: &str) -> Result<String, DataError> {
	debug!("fetching {url}");
	let fetch_err = |e: gloo_net::Error| DataError::Fetch {
		url: url.to_string(),
		message: e.to_string(),
	};
	let response = Request::get(url).send().await.map_err(fetch_err)?;
	if !response.ok() {
		return Err(DataError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}
	response.text().await.map_err(fetch_err)
}

/// Loads the circulation dataset with the excluded branch removed.
pub async fn load_dataset(sources: &DataSources) -> Result<Dataset, DataError> {
	let text = fetch_text(&sources.circulation).await?;
	let records = parse_circulation_csv(&sources.circulation, &text)?;
	let dataset = Dataset::new(records, sources.excluded_branch.as_deref());
	info!(
		"loaded {} circulation records across {} branches",
		dataset.records.len(),
		dataset.branches.len()
	);
	Ok(dataset)
}

pub async fn load_branch_directory(sources: &DataSources) -> Result<BranchDirectory, DataError> {
	let text = fetch_text(&sources.branch_info).await?;
	let branches = parse_branch_csv(&sources.branch_info, &text)?;
	Ok(BranchDirectory::new(&branches))
}

/// Loads both annual files and merges them for one branch.
pub async fn load_branch_trend(
	sources: &DataSources,
	branch: &str,
) -> Result<Vec<AnnualPoint>, DataError> {
	let reg_text = fetch_text(&sources.registrations).await?;
	let visit_text = fetch_text(&sources.visits).await?;
	let registrations = parse_annual_csv(&sources.registrations, &reg_text)?;
	let visits = parse_annual_csv(&sources.visits, &visit_text)?;
	let merged = merge_annual(&registrations, &visits, branch);
	info!("branch {branch}: {} annual points", merged.len());
	Ok(merged)
}
