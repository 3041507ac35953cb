// Discovery + engine + formatter wired together over a real directory tree.

use std::path::PathBuf;

use docvet_core::config::DocvetConfig;
use docvet_output::{json::JsonFormatter, OutputFormatter};
use docvet_parsers::walker::FileWalker;

use crate::common::{default_engine, write_source, CLEAN_MEMBER};

const UNDOCUMENTED_EXAMPLE: &str = "\
/// <summary>Subtracts.</summary>
public static int Sub(int a, int b) => a - b;
";

#[test]
fn test_full_scan_over_project_tree() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "src/Calculator.cs", CLEAN_MEMBER);
    write_source(dir.path(), "src/Math.cs", UNDOCUMENTED_EXAMPLE);
    write_source(dir.path(), "src/bin/Debug/Generated.cs", UNDOCUMENTED_EXAMPLE);
    write_source(dir.path(), "README.md", "# not a source file");

    let engine = default_engine();
    let walker = FileWalker::new(dir.path(), engine.config()).unwrap();
    let files = walker.walk();
    assert_eq!(files.len(), 2, "bin/ output and non-source files excluded");

    let result = engine.validate_paths(&files);
    assert_eq!(result.files_scanned, 2);
    assert_eq!(result.files_with_issues, 1);
    assert_eq!(result.total_errors, 1);
    assert_eq!(result.total_warnings, 0);
    assert_eq!(result.status, "error");
    assert!(result.diagnostics[0].file.ends_with("Math.cs"));
}

#[test]
fn test_scan_order_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "Zebra.cs", UNDOCUMENTED_EXAMPLE);
    write_source(dir.path(), "Alpha.cs", UNDOCUMENTED_EXAMPLE);

    let engine = default_engine();
    let walker = FileWalker::new(dir.path(), engine.config()).unwrap();

    let first = engine.validate_paths(&walker.walk());
    let second = engine.validate_paths(&walker.walk());
    assert_eq!(first.diagnostics, second.diagnostics);
    assert!(first.diagnostics[0].file.ends_with("Alpha.cs"));
    assert!(first.diagnostics[1].file.ends_with("Zebra.cs"));
}

#[test]
fn test_unreadable_file_is_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write_source(dir.path(), "Clean.cs", CLEAN_MEMBER);
    let missing = PathBuf::from(dir.path().join("DoesNotExist.cs"));

    let result = default_engine().validate_paths(&[missing, clean]);
    assert_eq!(result.files_scanned, 2);
    assert_eq!(result.total_errors, 1);
    assert_eq!(result.diagnostics[0].line, 0);
    assert!(result.diagnostics[0].message.starts_with("Could not read file:"));
}

#[test]
fn test_json_output_of_full_scan() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_source(dir.path(), "Bad.cs", UNDOCUMENTED_EXAMPLE);

    let result = default_engine().validate_paths(&[bad]);
    let out = JsonFormatter.format_scan(&result);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["total_errors"], 1);
    assert_eq!(value["diagnostics"][0]["severity"], "error");
}

#[test]
fn test_overridden_policy_end_to_end() {
    // A Rust-flavored policy: different marker, tag, and visibility set.
    let mut cfg = DocvetConfig::default();
    cfg.markers.code_open = "<code lang=\"rust\">".to_string();
    cfg.visibility = vec!["pub".to_string()];
    cfg.extensions = vec!["rs".to_string()];

    let engine = docvet_enforce::engine::ValidationEngine::new(cfg).unwrap();
    let content = "\
/// <summary>Runs the thing.</summary>
/// <example>
/// <code lang=\"rust\">
/// run(1);
/// </code>
/// </example>
pub fn run(x: u32) {}
";
    let diags = engine.validate_content("lib.rs", content);
    assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags);
}
