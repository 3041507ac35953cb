//! Configuration file loading for docvet.
//!
//! Reads `docvet.json` and provides typed access to the full documentation
//! policy: comment markers, the non-private visibility set, the member
//! declaration grammar, placeholder patterns, and file discovery settings.
//! Falls back to sensible defaults when the config file is missing or
//! incomplete. The built-in defaults describe C# XML documentation comments.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::DocvetError;

/// Top-level docvet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocvetConfig {
    pub version: String,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default = "default_visibility")]
    pub visibility: Vec<String>,
    #[serde(default = "default_members")]
    pub members: Vec<MemberPattern>,
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

/// Markers that structure a documentation comment run.
///
/// `code_open` is matched case- and quote-sensitively: only an exactly
/// tagged code block satisfies the example rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_doc_comment")]
    pub doc_comment: String,
    #[serde(default = "default_summary_open")]
    pub summary_open: String,
    #[serde(default = "default_example_open")]
    pub example_open: String,
    #[serde(default = "default_code_open")]
    pub code_open: String,
    #[serde(default = "default_code_close")]
    pub code_close: String,
}

/// One member declaration recognizer.
///
/// `pattern` is a regex template; the literal `{vis}` placeholder is
/// replaced with the configured visibility alternation before compiling.
/// A `(?P<name>...)` group, when present, captures the declared name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberPattern {
    pub kind: String,
    pub pattern: String,
}

fn default_doc_comment() -> String {
    "///".to_string()
}
fn default_summary_open() -> String {
    "<summary>".to_string()
}
fn default_example_open() -> String {
    "<example>".to_string()
}
fn default_code_open() -> String {
    "<code lang=\"csharp\">".to_string()
}
fn default_code_close() -> String {
    "</code>".to_string()
}

fn default_visibility() -> Vec<String> {
    // "protected internal" before "protected" so the longer keyword wins
    // in the generated alternation.
    vec![
        "public".to_string(),
        "internal".to_string(),
        "protected internal".to_string(),
        "protected".to_string(),
    ]
}

fn default_members() -> Vec<MemberPattern> {
    // Ordered: first match wins, so the more specific declaration shapes
    // come before the catch-all method pattern.
    let patterns: &[(&str, &str)] = &[
        (
            "conversion-operator",
            r"^\s*{vis}\s+(?:static\s+)?(?:implicit|explicit)\s+operator\s+(?P<name>[\w<>\[\],?]+)",
        ),
        (
            "operator",
            r"^\s*{vis}\s+(?:static\s+)?[\w<>\[\],?]+\s+operator\b",
        ),
        (
            "delegate",
            r"^\s*{vis}\s+delegate\s+[\w<>\[\],?]+\s+(?P<name>\w+)\s*\(",
        ),
        (
            "type",
            r"^\s*{vis}\s+(?:static\s+|abstract\s+|sealed\s+|partial\s+)*(?:class|struct|interface|enum)\s+(?P<name>\w+)",
        ),
        ("method", r"^\s*{vis}\s+.*\s+(?P<name>\w+)\s*\("),
        (
            "property",
            r"^\s*{vis}\s+(?:static\s+)?(?:readonly\s+)?[\w<>\[\],?]+\s+(?P<name>\w+)\s*(?:\{|=>)",
        ),
        (
            "field",
            r"^\s*{vis}\s+(?:static\s+)?(?:readonly\s+|const\s+)?[\w<>\[\],?]+\s+(?P<name>\w+)\s*[=;]",
        ),
        (
            "property",
            r"^\s*{vis}\s+(?:static\s+)?(?P<name>\w+)\s*\{",
        ),
    ];

    patterns
        .iter()
        .map(|(kind, pattern)| MemberPattern {
            kind: kind.to_string(),
            pattern: pattern.to_string(),
        })
        .collect()
}

fn default_placeholders() -> Vec<String> {
    vec![
        r"invoke\s+the\s+member\s+here".to_string(),
        r"invoke\s+member\s+here".to_string(),
        "TODO".to_string(),
        "placeholder".to_string(),
        r"\.\.\.\.\.\.".to_string(), // runs of dots
    ]
}

fn default_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/bin/**".to_string(), "**/obj/**".to_string()]
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            doc_comment: default_doc_comment(),
            summary_open: default_summary_open(),
            example_open: default_example_open(),
            code_open: default_code_open(),
            code_close: default_code_close(),
        }
    }
}

impl Default for DocvetConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            markers: MarkerConfig::default(),
            visibility: default_visibility(),
            members: default_members(),
            placeholders: default_placeholders(),
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

impl DocvetConfig {
    /// Load configuration from `docvet.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join("docvet.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "docvet: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load configuration from an explicitly named file. Unlike [`load`],
    /// a missing or malformed file is an error here: the user asked for
    /// this exact file.
    ///
    /// [`load`]: DocvetConfig::load
    pub fn load_file(path: &Path) -> Result<Self, DocvetError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DocvetError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            DocvetError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}
