use serde::{Deserialize, Serialize};

use docvet_core::types::Diagnostic;

/// Aggregate result of one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub version: String,
    pub command: String,
    /// "ok" | "error" | "warning"
    pub status: String,
    pub files_scanned: u32,
    pub files_with_issues: u32,
    pub total_errors: u32,
    pub total_warnings: u32,
    /// All diagnostics in file order, then line order within a file.
    pub diagnostics: Vec<Diagnostic>,
}
