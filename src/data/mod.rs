//! Loading and shaping the library CSV datasets.

mod annual;
mod directory;
mod error;
mod fetch;
mod parse;
mod types;

pub use annual::{correlation, correlation_text, format_thousands, totals_text};
pub use directory::BranchDirectory;
pub use error::DataError;
pub use fetch::{load_branch_directory, load_branch_trend, load_dataset};
pub use types::{AnnualPoint, CardholderType, CirculationRecord, Dataset, Year};
