//! Output formatting helpers.

mod table;

pub use table::{LanguageCoverage, format_coverage_table};
