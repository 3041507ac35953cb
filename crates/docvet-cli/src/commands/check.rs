use std::path::{Path, PathBuf};

use docvet_core::config::DocvetConfig;
use docvet_enforce::engine::ValidationEngine;
use docvet_output::OutputFormatter;
use docvet_parsers::walker::FileWalker;

/// Run `docvet check` — scan the given paths and report policy violations.
///
/// Exit code contract: 0 when no errors (warnings alone still pass),
/// 1 when any error-severity diagnostic was produced, 2 for environment
/// failures before analysis could start.
pub fn run(formatter: &dyn OutputFormatter, paths: Vec<String>, config_path: Option<String>) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("docvet check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = match &config_path {
        Some(p) => match DocvetConfig::load_file(Path::new(p)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("docvet check: {}", e);
                return 2;
            }
        },
        None => DocvetConfig::load(&cwd),
    };

    let engine = match ValidationEngine::new(config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("docvet check: {}", e);
            return 2;
        }
    };

    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![cwd]
    } else {
        paths.iter().map(PathBuf::from).collect()
    };

    // Directories are walked; explicit file arguments are taken verbatim
    // so a caller can check a generated or ignored file on purpose.
    let mut files = Vec::new();
    for root in &roots {
        if root.is_dir() {
            let walker = match FileWalker::new(root, engine.config()) {
                Ok(w) => w,
                Err(e) => {
                    eprintln!("docvet check: {}", e);
                    return 2;
                }
            };
            files.extend(walker.walk());
        } else {
            files.push(root.clone());
        }
    }
    files.sort();
    files.dedup();

    let result = engine.validate_paths(&files);
    print!("{}", formatter.format_scan(&result));

    if result.total_errors > 0 {
        1
    } else {
        0
    }
}
