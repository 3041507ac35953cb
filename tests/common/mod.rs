/// Shared test helpers for docvet integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};

use docvet_core::config::DocvetConfig;
use docvet_enforce::engine::ValidationEngine;

/// Build a validation engine with the default (C# XML doc) policy.
#[allow(dead_code)]
pub fn default_engine() -> ValidationEngine {
    ValidationEngine::new(DocvetConfig::default()).expect("default config must compile")
}

/// Write a source file under the given directory, creating parents.
#[allow(dead_code)]
pub fn write_source(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A fully policy-compliant documented member.
#[allow(dead_code)]
pub const CLEAN_MEMBER: &str = "\
/// <summary>Adds two numbers.</summary>
/// <example>
/// <code lang=\"csharp\">
/// var sum = Calculator.Add(1, 2);
/// </code>
/// </example>
public static int Add(int a, int b) => a + b;
";
