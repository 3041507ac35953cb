//! Text segmentation and file discovery for docvet.
//!
//! This crate hosts the extraction half of the pipeline:
//! - [`grammar`] — ordered regex recognizers for non-private member declarations
//! - [`extract`] — the line-oriented state machine that groups doc-comment
//!   runs into [`DocBlock`](docvet_core::types::DocBlock)s
//! - [`walker`] — gitignore-aware source file discovery
//!
//! No syntax tree is ever built; recognition is deliberately line-level.

pub mod extract;
pub mod grammar;
pub mod walker;
