//! Placeholder pattern set for example code bodies.
//!
//! Compiled once from configuration and injected into the checker; the set
//! is immutable for the lifetime of a run. Matching is case-insensitive.

use docvet_core::types::DocvetError;
use regex::{Regex, RegexBuilder};

#[derive(Debug)]
pub struct PlaceholderSet {
    rules: Vec<(String, Regex)>,
}

impl PlaceholderSet {
    pub fn compile(patterns: &[String]) -> Result<Self, DocvetError> {
        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| DocvetError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            rules.push((pattern.clone(), regex));
        }
        Ok(Self { rules })
    }

    /// Patterns matching the given code body, in rule order. Each matching
    /// pattern is reported once no matter how often it occurs.
    pub fn matches<'a>(&'a self, code: &str) -> Vec<&'a str> {
        self.rules
            .iter()
            .filter(|(_, regex)| regex.is_match(code))
            .map(|(pattern, _)| pattern.as_str())
            .collect()
    }
}
