pub mod analysis;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod reporting;
pub mod rules;
pub mod types; // Common Data Structures
