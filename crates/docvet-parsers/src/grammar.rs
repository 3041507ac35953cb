//! Member declaration recognition.
//!
//! A [`MemberGrammar`] is an ordered list of compiled regex recognizers,
//! one per declaration shape (method, property, type, operator, ...). Each
//! pattern template carries a `{vis}` placeholder that is substituted with
//! the configured non-private visibility alternation before compiling.
//! First match wins; lines matching no recognizer are not declarations.

use docvet_core::config::MemberPattern;
use docvet_core::types::DocvetError;
use regex::Regex;

/// A successful match of a member declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberMatch {
    pub kind: String,
    pub name: Option<String>,
}

/// Ordered set of compiled member declaration recognizers.
#[derive(Debug)]
pub struct MemberGrammar {
    recognizers: Vec<(String, Regex)>,
}

impl MemberGrammar {
    /// Compile the grammar from the configured visibility set and pattern
    /// templates. A bad pattern fails here, at engine construction, never
    /// mid-scan.
    pub fn compile(
        visibility: &[String],
        members: &[MemberPattern],
    ) -> Result<Self, DocvetError> {
        let vis = visibility_alternation(visibility);
        let mut recognizers = Vec::with_capacity(members.len());
        for member in members {
            let pattern = member.pattern.replace("{vis}", &vis);
            let regex = Regex::new(&pattern).map_err(|source| DocvetError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            recognizers.push((member.kind.clone(), regex));
        }
        Ok(Self { recognizers })
    }

    /// Match a source line against the grammar, in configured order.
    pub fn match_line(&self, line: &str) -> Option<MemberMatch> {
        for (kind, regex) in &self.recognizers {
            if let Some(caps) = regex.captures(line) {
                return Some(MemberMatch {
                    kind: kind.clone(),
                    name: caps.name("name").map(|m| m.as_str().to_string()),
                });
            }
        }
        None
    }
}

/// Build the `{vis}` alternation from the configured keyword set.
/// Multi-word keywords ("protected internal") tolerate any whitespace run
/// between their words.
fn visibility_alternation(keywords: &[String]) -> String {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|keyword| {
            keyword
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();
    format!("(?:{})", alternatives.join("|"))
}
