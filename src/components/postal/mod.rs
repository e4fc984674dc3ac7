//! Postal code to nearby branch lookup.

mod component;
mod lookup;
mod table;

pub use component::PostalLookup;
pub use lookup::branch_name;
