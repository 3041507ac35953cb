use owo_colors::OwoColorize;

use crate::OutputFormatter;
use docvet_core::types::Severity;
use docvet_enforce::types::ScanResult;

const BANNER: &str = "==================================================";

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_scan(&self, result: &ScanResult) -> String {
        let mut out = String::new();

        for d in &result.diagnostics {
            let label = match d.severity {
                Severity::Error => "ERROR".red().to_string(),
                Severity::Warning => "WARNING".yellow().to_string(),
            };
            out.push_str(&format!("{}: {}:{} - {}\n", label, d.file, d.line, d.message));
        }

        if !result.diagnostics.is_empty() {
            out.push('\n');
        }
        out.push_str(BANNER);
        out.push('\n');
        out.push_str(&format!("Files scanned: {}\n", result.files_scanned));
        out.push_str(&format!("Files with issues: {}\n", result.files_with_issues));
        out.push_str(&format!("Total errors: {}\n", result.total_errors));
        out.push_str(&format!("Total warnings: {}\n", result.total_warnings));
        out.push_str(BANNER);
        out.push('\n');

        if result.total_errors > 0 {
            out.push_str(&format!(
                "{}: {} error(s) found\n",
                "VALIDATION FAILED".red(),
                result.total_errors
            ));
        } else if result.total_warnings > 0 {
            out.push_str(&format!(
                "{}: {} warning(s) found\n",
                "VALIDATION PASSED WITH WARNINGS".yellow(),
                result.total_warnings
            ));
        } else {
            out.push_str(&format!(
                "{}: All documentation checks passed\n",
                "VALIDATION PASSED".green()
            ));
        }

        out
    }
}
