use serde::{Deserialize, Serialize};

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous run of doc-comment lines attached to a member declaration.
///
/// The extractor only finalizes a block when the run is immediately followed
/// by a non-private member declaration; runs broken by anything else are
/// discarded and never surface here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocBlock {
    /// First comment line of the run (1-indexed).
    pub start_line: u32,
    /// Last comment line of the run (inclusive).
    pub end_line: u32,
    /// A summary-open marker was seen somewhere in the run. Sticky: once
    /// set it stays set even if the element never closes.
    pub has_summary: bool,
    /// An example-open marker was seen in the run.
    pub has_example: bool,
    /// A code-block-open marker with the required language tag was seen.
    pub has_tagged_code: bool,
    /// Verbatim body of the captured code sample. When a run contains
    /// multiple tagged code blocks, the last one wins.
    pub code_content: String,
    /// Line of the member declaration this block documents.
    pub member_line: u32,
    /// Kind label from the grammar recognizer that matched ("method",
    /// "property", "type", ...).
    pub member_kind: String,
    /// Declared name, when the recognizer could capture one.
    pub member_name: Option<String>,
}

impl DocBlock {
    /// Open a new block at the given 1-indexed comment line.
    pub fn open_at(line: u32) -> Self {
        Self {
            start_line: line,
            end_line: line,
            has_summary: false,
            has_example: false,
            has_tagged_code: false,
            code_content: String::new(),
            member_line: 0,
            member_kind: String::new(),
            member_name: None,
        }
    }
}

/// One reported documentation issue. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    /// Block start line, or 0 for file-level failures.
    pub line: u32,
    pub severity: Severity,
    pub message: String,
}

/// Errors raised while building a validation engine from configuration.
///
/// These only occur at construction time. Per-file analysis never fails:
/// read errors degrade to line-0 diagnostics instead.
#[derive(Debug, thiserror::Error)]
pub enum DocvetError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}
