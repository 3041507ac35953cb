//! Validation engine: extract doc blocks, apply the policy, aggregate.
//!
//! The engine owns the policy configuration and its compiled forms (member
//! grammar, placeholder set). Files are processed strictly one at a time in
//! the order given; a read failure on one file degrades to a single line-0
//! error diagnostic and never aborts the run.

use std::path::{Path, PathBuf};

use docvet_core::config::DocvetConfig;
use docvet_core::types::{Diagnostic, DocvetError, Severity};
use docvet_parsers::extract::BlockExtractor;
use docvet_parsers::grammar::MemberGrammar;

use crate::checks;
use crate::placeholders::PlaceholderSet;
use crate::types::ScanResult;

pub struct ValidationEngine {
    config: DocvetConfig,
    grammar: MemberGrammar,
    placeholders: PlaceholderSet,
}

impl ValidationEngine {
    /// Build an engine from configuration, compiling all patterns up front.
    pub fn new(config: DocvetConfig) -> Result<Self, DocvetError> {
        let grammar = MemberGrammar::compile(&config.visibility, &config.members)?;
        let placeholders = PlaceholderSet::compile(&config.placeholders)?;
        Ok(Self {
            config,
            grammar,
            placeholders,
        })
    }

    pub fn config(&self) -> &DocvetConfig {
        &self.config
    }

    /// Validate raw content. Pure: deterministic for identical input, no I/O.
    pub fn validate_content(&self, file: &str, content: &str) -> Vec<Diagnostic> {
        let extractor = BlockExtractor::new(&self.config.markers, &self.grammar);
        let mut diagnostics = Vec::new();
        for block in extractor.extract(content) {
            diagnostics.extend(checks::check_block(
                &block,
                file,
                &self.config.markers,
                &self.placeholders,
            ));
        }
        diagnostics
    }

    /// Validate one file on disk.
    pub fn validate_file(&self, path: &Path) -> Vec<Diagnostic> {
        let file = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(content) => self.validate_content(&file, &content),
            Err(e) => vec![Diagnostic {
                file,
                line: 0,
                severity: Severity::Error,
                message: format!("Could not read file: {}", e),
            }],
        }
    }

    /// Validate a list of files in the given order and aggregate the run.
    pub fn validate_paths(&self, paths: &[PathBuf]) -> ScanResult {
        let mut diagnostics = Vec::new();
        let mut files_with_issues: u32 = 0;

        for path in paths {
            let file_diagnostics = self.validate_file(path);
            if !file_diagnostics.is_empty() {
                files_with_issues += 1;
            }
            diagnostics.extend(file_diagnostics);
        }

        let total_errors = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count() as u32;
        let total_warnings = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count() as u32;

        let status = if total_errors > 0 {
            "error"
        } else if total_warnings > 0 {
            "warning"
        } else {
            "ok"
        };

        ScanResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            files_scanned: paths.len() as u32,
            files_with_issues,
            total_errors,
            total_warnings,
            diagnostics,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
