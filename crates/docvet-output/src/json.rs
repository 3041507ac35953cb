use crate::OutputFormatter;
use docvet_enforce::types::ScanResult;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_scan(&self, result: &ScanResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
