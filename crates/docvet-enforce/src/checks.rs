//! The three-rule documentation policy.
//!
//! Evaluation order matters: the first failing rule wins per block and the
//! later rules are skipped. A block that reaches the placeholder scan can
//! produce zero or more warnings but never re-reports rules 1-2.

use docvet_core::config::MarkerConfig;
use docvet_core::types::{Diagnostic, DocBlock, Severity};

use crate::placeholders::PlaceholderSet;

/// Apply the policy to one finalized block. Pure: no side effects beyond
/// the returned diagnostics, all addressed at the block's start line.
pub fn check_block(
    block: &DocBlock,
    file: &str,
    markers: &MarkerConfig,
    placeholders: &PlaceholderSet,
) -> Vec<Diagnostic> {
    if !block.has_summary {
        return vec![Diagnostic {
            file: file.to_string(),
            line: block.start_line,
            severity: Severity::Error,
            message: format!("Non-private member missing {}", markers.summary_open),
        }];
    }

    if !block.has_example || !block.has_tagged_code {
        return vec![Diagnostic {
            file: file.to_string(),
            line: block.start_line,
            severity: Severity::Error,
            message: format!(
                "Non-private member missing {} with {}",
                markers.example_open, markers.code_open
            ),
        }];
    }

    placeholders
        .matches(&block.code_content)
        .into_iter()
        .map(|pattern| Diagnostic {
            file: file.to_string(),
            line: block.start_line,
            severity: Severity::Warning,
            message: format!("Code example contains placeholder pattern: {}", pattern),
        })
        .collect()
}
