// End-to-end policy scenarios, from raw source text to diagnostics.

use docvet_core::types::Severity;

use crate::common::{default_engine, CLEAN_MEMBER};

/// Summary + example + correctly tagged clean code before a public method:
/// no diagnostics at all.
#[test]
fn scenario_fully_documented_member_passes() {
    let diags = default_engine().validate_content("Calculator.cs", CLEAN_MEMBER);
    assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags);
}

/// Summary but no example before a public property: exactly one error at
/// the block's first comment line.
#[test]
fn scenario_summary_without_example_is_one_error() {
    let content = "\
public class Counter
{
    /// <summary>Current count.</summary>
    public int Count { get; set; }
}
";
    let diags = default_engine().validate_content("Counter.cs", content);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(diags[0].line, 3);
    assert!(diags[0].message.contains("<example>"));
}

/// Summary, example, and tagged code containing TODO before a public type:
/// zero errors, exactly one warning naming the pattern.
#[test]
fn scenario_placeholder_in_example_is_one_warning() {
    let content = "\
/// <summary>Parses things.</summary>
/// <example>
/// <code lang=\"csharp\">
/// // TODO wire this up
/// </code>
/// </example>
public class Parser
{
}
";
    let diags = default_engine().validate_content("Parser.cs", content);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(diags[0].line, 1);
    assert!(diags[0].message.contains("TODO"));
}

/// A comment run not followed by any declaration: zero blocks, zero
/// diagnostics.
#[test]
fn scenario_dangling_comment_run_is_silent() {
    let content = "\
/// just some notes
/// nothing structured here
";
    let diags = default_engine().validate_content("Notes.cs", content);
    assert!(diags.is_empty());
}

/// A documented private member is outside the policy entirely.
#[test]
fn scenario_private_member_is_silent() {
    let content = "\
/// <summary>Secret.</summary>
private void Hide() { }
";
    let diags = default_engine().validate_content("Hidden.cs", content);
    assert!(diags.is_empty());
}

/// Missing summary short-circuits: the same block's missing example and
/// placeholder text stay unreported.
#[test]
fn scenario_rules_short_circuit_per_block() {
    let content = "\
/// <example>
/// <code lang=\"csharp\">
/// // TODO
/// </code>
/// </example>
public void Run() { }
";
    let diags = default_engine().validate_content("Runner.cs", content);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("<summary>"));
}

/// Running the checker twice on identical input yields identical
/// diagnostic lists, in identical order.
#[test]
fn scenario_analysis_is_idempotent() {
    let content = "\
/// <summary>One.</summary>
public void One() { }

/// <example></example>
public void Two() { }
";
    let engine = default_engine();
    let first = engine.validate_content("Mix.cs", content);
    let second = engine.validate_content("Mix.cs", content);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

/// Diagnostics never exceed the number of qualifying declarations.
#[test]
fn scenario_blocks_bounded_by_declarations() {
    let content = "\
/// orphan one

/// orphan two
int x;
/// <summary>Documented.</summary>
public void Only() { }
";
    let diags = default_engine().validate_content("Bound.cs", content);
    // One qualifying declaration, one block, one error (missing example).
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 5);
}
