//! Doc-comment block extraction.
//!
//! A single forward pass over the file groups consecutive doc-comment lines
//! into runs, classifies each run's structural content (summary marker,
//! example marker, tagged code sample), and finalizes the run as a
//! [`DocBlock`] only when the line that breaks it is a non-private member
//! declaration. Every other break discards the run: undocumented members
//! and free-floating comments are deliberately invisible downstream.

use docvet_core::config::MarkerConfig;
use docvet_core::types::DocBlock;

use crate::grammar::MemberGrammar;

/// Line-oriented extractor for documentation blocks.
pub struct BlockExtractor<'a> {
    markers: &'a MarkerConfig,
    grammar: &'a MemberGrammar,
}

impl<'a> BlockExtractor<'a> {
    pub fn new(markers: &'a MarkerConfig, grammar: &'a MemberGrammar) -> Self {
        Self { markers, grammar }
    }

    /// Extract all finalized documentation blocks from file content,
    /// in file order. Lines are 1-indexed for reporting.
    pub fn extract(&self, content: &str) -> Vec<DocBlock> {
        let mut blocks = Vec::new();
        let mut current: Option<DocBlock> = None;
        let mut in_code = false;
        let mut code_lines: Vec<String> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_num = (idx + 1) as u32;
            let stripped = line.trim_start();

            if stripped.starts_with(self.markers.doc_comment.as_str()) {
                let block = current.get_or_insert_with(|| DocBlock::open_at(line_num));
                block.end_line = line_num;

                // Sticky: a summary that never closes still counts.
                if stripped.contains(self.markers.summary_open.as_str()) {
                    block.has_summary = true;
                }
                if stripped.contains(self.markers.example_open.as_str()) {
                    block.has_example = true;
                }
                // Exact, case- and quote-sensitive tag match. A repeated
                // open resets the buffer, so the last code block wins.
                if stripped.contains(self.markers.code_open.as_str()) {
                    block.has_tagged_code = true;
                    in_code = true;
                    code_lines.clear();
                }
                if stripped.contains(self.markers.code_close.as_str()) {
                    in_code = false;
                    block.code_content = code_lines.join("\n");
                }
                if in_code {
                    code_lines.push(strip_doc_prefix(line, &self.markers.doc_comment));
                }
            } else {
                // Run break: finalize against a qualifying declaration or
                // discard. Undocumented declarations produce nothing.
                if let Some(mut block) = current.take() {
                    if let Some(member) = self.grammar.match_line(line) {
                        block.member_line = line_num;
                        block.member_kind = member.kind;
                        block.member_name = member.name;
                        blocks.push(block);
                    }
                }
                in_code = false;
                code_lines.clear();
            }
        }

        // A run still open at end-of-file has no declaration to attach to.
        blocks
    }
}

/// Remove the doc-comment marker and one optional following space,
/// preserving any further indentation of the code body.
fn strip_doc_prefix(line: &str, marker: &str) -> String {
    let stripped = line.trim_start();
    let rest = stripped.strip_prefix(marker).unwrap_or(stripped);
    rest.strip_prefix(' ').unwrap_or(rest).to_string()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
