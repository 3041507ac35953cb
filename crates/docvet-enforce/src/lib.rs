//! Documentation policy enforcement for docvet.
//!
//! Applies the three-rule policy to extracted documentation blocks:
//! - missing summary (error)
//! - missing example with a correctly tagged code sample (error)
//! - placeholder text inside the code sample (warning, one per pattern)
//!
//! Rules short-circuit per block: the first failing rule suppresses the
//! later ones. The [`engine::ValidationEngine`] ties extraction and
//! checking together and aggregates a run-wide [`types::ScanResult`].

pub mod checks;
pub mod engine;
pub mod placeholders;
pub mod types;
