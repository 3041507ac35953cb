use std::path::Path;

use docvet_core::config::DocvetConfig;

/// Run `docvet init` — write a default `docvet.json` to the current
/// directory. Refuses to overwrite an existing file.
pub fn run() -> i32 {
    let path = Path::new("docvet.json");
    if path.exists() {
        eprintln!("docvet init: docvet.json already exists");
        return 2;
    }

    let config = DocvetConfig::default();
    let json = match serde_json::to_string_pretty(&config) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("docvet init: failed to serialize default config: {}", e);
            return 2;
        }
    };

    if let Err(e) = std::fs::write(path, json + "\n") {
        eprintln!("docvet init: failed to write docvet.json: {}", e);
        return 2;
    }

    println!("Wrote docvet.json with the default documentation policy");
    0
}
