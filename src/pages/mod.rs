pub mod branch;
pub mod home;
pub mod not_found;
