//! Output formatters for docvet scan results.
//!
//! Provides two output modes:
//! - **Human** (default): Colored, formatted output for terminal users
//! - **JSON** (`--json`): Machine-readable structured output
//!
//! Formatters render a finished [`ScanResult`]; they never influence
//! analysis or exit-code selection.

pub mod human;
pub mod json;

use docvet_enforce::types::ScanResult;

pub trait OutputFormatter {
    fn format_scan(&self, result: &ScanResult) -> String;
}
