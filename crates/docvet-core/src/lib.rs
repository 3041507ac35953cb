//! Core types and configuration for docvet.
//!
//! This crate provides the foundational data structures used across all docvet crates:
//! - [`types`] — Documentation blocks, diagnostics, severities, and error types
//! - [`config`] — Policy configuration loading from `docvet.json`

pub mod config;
pub mod types;
