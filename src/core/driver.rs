//! Concurrent parse driver
//!
//! Orchestrates the walk → lex → resolve pipeline. Files are lexed on the
//! rayon worker pool (one task per file, bounded by hardware parallelism)
//! and the finished tokens land in a shared concurrent map; the resolver
//! only runs once every worker has finished. A per-file failure drops that
//! file and is reported, never aborting the parse. A synchronous mode walks
//! and lexes on the calling thread and produces identical results.

use crate::config::Config;
use crate::core::resolver::Resolver;
use crate::core::walker::Walker;
use crate::error::{DependorError, Result};
use crate::models::config::Settings;
use crate::models::graph::DependencyGraph;
use crate::models::token::FileToken;
use crate::parsers::lexer::Lexer;
use dashmap::DashMap;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Cooperative cancellation signal observed by workers between files
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; workers stop picking up new files
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// True once cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Drives the full parse for one root directory
pub struct GraphDriver {
    settings: Settings,
    config: Arc<Config>,
    cancel: CancelToken,
    errors: Arc<Mutex<Vec<DependorError>>>,
}

impl GraphDriver {
    /// Create a driver for `settings`, loading `dependor.json` from the root
    pub fn new(settings: Settings) -> Result<Self> {
        let config = Arc::new(Config::load(&settings.root_path)?);
        Ok(Self::with_config(settings, config))
    }

    /// Create a driver with an already-loaded configuration
    pub fn with_config(settings: Settings, config: Arc<Config>) -> Self {
        Self {
            settings,
            config,
            cancel: CancelToken::new(),
            errors: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handle callers can use to cancel an in-flight parse
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Per-file diagnostics collected during the last parse
    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .map(|errors| errors.iter().map(|err| err.user_message()).collect())
            .unwrap_or_default()
    }

    /// Walk the root, lex every candidate file and resolve the final graph.
    /// Uses the worker pool unless settings disable it.
    pub fn parse(&self) -> Result<DependencyGraph> {
        let files = self.collect_files()?;

        let tokens = if self.settings.parallel {
            self.lex_parallel(&files)
        } else {
            self.lex_sync(&files)
        };

        if self.cancel.is_cancelled() {
            return Err(DependorError::Cancelled);
        }

        Ok(Resolver::new(tokens, Arc::clone(&self.config)).resolve())
    }

    /// Walk and lex on the calling thread. Results are identical to the
    /// parallel mode; this exists for reproducibility in tests and
    /// debugging.
    pub fn parse_sync(&self) -> Result<DependencyGraph> {
        let files = self.collect_files()?;
        let tokens = self.lex_sync(&files);

        if self.cancel.is_cancelled() {
            return Err(DependorError::Cancelled);
        }

        Ok(Resolver::new(tokens, Arc::clone(&self.config)).resolve())
    }

    fn collect_files(&self) -> Result<Vec<String>> {
        Walker::new(Arc::clone(&self.config))
            .verbose(self.settings.verbose)
            .collect_source_files(&self.settings.root_path)
    }

    fn lex_parallel(&self, files: &[String]) -> HashMap<String, FileToken> {
        let table: DashMap<String, FileToken> = DashMap::with_capacity(files.len());

        files.par_iter().for_each(|file| {
            if self.cancel.is_cancelled() {
                return;
            }
            if let Some(token) = self.lex_file(file) {
                // The lexer never touches the table; workers only lock to
                // insert their finished token.
                table.insert(token.file_path.clone(), token);
            }
        });

        table.into_iter().collect()
    }

    fn lex_sync(&self, files: &[String]) -> HashMap<String, FileToken> {
        let mut table = HashMap::with_capacity(files.len());
        for file in files {
            if self.cancel.is_cancelled() {
                break;
            }
            if let Some(token) = self.lex_file(file) {
                table.insert(token.file_path.clone(), token);
            }
        }
        table
    }

    /// Lex one file, reporting and swallowing per-file failures. `key` is
    /// the root-relative path that names the token; the bytes are read from
    /// under the configured root.
    fn lex_file(&self, key: &str) -> Option<FileToken> {
        let full_path = self.settings.root_path.join(key);
        let result = fs::read_to_string(&full_path)
            .map_err(|source| DependorError::file_read_error(&full_path, source))
            .and_then(|source| Lexer::new(&source, key).tokenize());
        match result {
            Ok(token) => Some(token),
            Err(err) => {
                self.record_error(err);
                None
            }
        }
    }

    fn record_error(&self, err: DependorError) {
        eprintln!("{}: {}", err.severity(), err.user_message());
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(err);
        }
    }
}
