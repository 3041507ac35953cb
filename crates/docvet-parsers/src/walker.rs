//! Source file discovery.
//!
//! Walks a directory tree respecting gitignore rules, keeps only files with
//! a configured extension, drops anything under an exclude glob (generated
//! output like `bin/` and `obj/` by default), and returns paths in
//! lexicographic order so diagnostic output is reproducible run-to-run.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use docvet_core::config::DocvetConfig;
use docvet_core::types::DocvetError;

pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl FileWalker {
    pub fn new(root: &Path, config: &DocvetConfig) -> Result<Self, DocvetError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|e| {
                DocvetError::Config(format!("invalid exclude pattern `{}`: {}", pattern, e))
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|e| DocvetError::Config(format!("failed to build exclude set: {}", e)))?;

        Ok(Self {
            root: root.to_path_buf(),
            extensions: config.extensions.clone(),
            exclude,
        })
    }

    /// Walk the root and return matching files, sorted and deduplicated.
    pub fn walk(&self) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if !self.has_scanned_extension(&path) {
                continue;
            }

            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            if self.exclude.is_match(relative) {
                continue;
            }

            files.push(path);
        }

        files.sort();
        files.dedup();
        files
    }

    fn has_scanned_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
