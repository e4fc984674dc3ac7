use thiserror::Error;

/// Failures while loading one of the CSV datasets.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DataError {
	#[error("failed to fetch {url}: {message}")]
	Fetch { url: String, message: String },

	#[error("{url} responded with HTTP {status}")]
	Status { url: String, status: u16 },

	#[error("malformed CSV in {source_name}: {message}")]
	Csv {
		source_name: String,
		message: String,
	},

	#[error("{source_name} row {row}: invalid {field} value {value:?}")]
	InvalidField {
		source_name: String,
		row: usize,
		field: &'static str,
		value: String,
	},
}

impl DataError {
	pub(crate) fn csv(source_name: &str, err: csv::Error) -> Self {
		Self::Csv {
			source_name: source_name.to_string(),
			message: err.to_string(),
		}
	}
}
