//! Directory walking functionality
//!
//! Depth-first discovery of lexable source files under a root. Paths are
//! yielded relative to the root with `/` separators, which keeps graph keys
//! portable and lets ignore globs and alias replacements match regardless of
//! where the root itself lives. Ignored directories are pruned whole-subtree;
//! I/O errors on individual entries are logged and skipped so one unreadable
//! directory cannot sink the walk. Only a failure to read the root itself is
//! surfaced.

use crate::config::Config;
use crate::error::{DependorError, Result};
use crate::utils::paths::is_source_file;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Walks the file tree under a root and yields candidate source files
pub struct Walker {
    config: Arc<Config>,
    verbose: bool,
}

impl Walker {
    /// Create a walker consulting `config` for ignore decisions
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    /// Log skipped directories and unreadable entries
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Collect every `.js`/`.jsx`/`.ts`/`.tsx` file under `root` in
    /// depth-first order, as root-relative slash-separated path strings
    pub fn collect_source_files(&self, root: &Path) -> Result<Vec<String>> {
        if !root.is_dir() {
            return Err(DependorError::InvalidPath {
                path: root.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        self.walk_dir(root, "", &mut files, true)?;
        Ok(files)
    }

    fn walk_dir(
        &self,
        dir: &Path,
        prefix: &str,
        files: &mut Vec<String>,
        is_root: bool,
    ) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                // The root must be readable; anything below it is skippable
                if is_root {
                    return Err(DependorError::file_read_error(dir, source));
                }
                eprintln!(
                    "Warning: could not read directory '{}': {}. Skipping.",
                    dir.display(),
                    source
                );
                return Ok(());
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    eprintln!(
                        "Warning: could not access an entry under '{}': {}. Skipping.",
                        dir.display(),
                        source
                    );
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let key = if prefix.is_empty() {
                name
            } else {
                format!("{}/{}", prefix, name)
            };
            let path = entry.path();

            if path.is_dir() {
                if self.config.should_ignore(&key) {
                    if self.verbose {
                        eprintln!("Ignoring directory {:?}", key);
                    }
                    continue;
                }
                self.walk_dir(&path, &key, files, false)?;
            } else if is_source_file(&path) && !self.config.should_ignore(&key) {
                files.push(key);
            }
        }

        Ok(())
    }
}
