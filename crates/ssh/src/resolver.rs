//! Recursive SSH config reader.
//!
//! [`Resolver::resolve`] walks a config file and every file it pulls in with
//! `Include`, collecting `Host` aliases in the order they are read. Each
//! canonical path is parsed at most once per call, which also breaks include
//! cycles. Problems below the top-level file become [`Diagnostic`]s instead
//! of errors.

use crate::error::{Diagnostic, ResolveError};
use crate::host::HostEntry;
use crate::include;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Include nesting limit, matching OpenSSH's own.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Settings for a [`Resolver`].
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Directory substituted for a leading `~`. Left unexpanded when `None`.
    pub home_dir: Option<PathBuf>,
    /// Maximum `Include` nesting below the top-level file.
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            home_dir: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Everything collected by one [`Resolver::resolve`] call.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Host aliases in file-read order, includes spliced in place.
    pub hosts: Vec<HostEntry>,
    /// Non-fatal problems, in the order they were hit.
    pub diagnostics: Vec<Diagnostic>,
    /// Canonical paths of the files that were parsed, in parse order.
    pub files: Vec<PathBuf>,
}

/// Reads SSH config files and follows their `Include` directives.
///
/// The resolver holds no state between calls; the visited set belongs to a
/// single [`resolve`](Self::resolve) pass.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Collects host aliases from `path` and everything it includes.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ConfigNotFound`] if `path` does not exist.
    /// Every other problem is reported through [`Resolution::diagnostics`].
    pub fn resolve(&self, path: &Path) -> Result<Resolution, ResolveError> {
        let root = canonicalize(path, self.options.home_dir.as_deref());
        if !root.exists() {
            return Err(ResolveError::ConfigNotFound(root));
        }

        let mut pass = Pass {
            options: &self.options,
            visited: HashSet::new(),
            resolution: Resolution::default(),
        };
        pass.visit(&root, 0);

        Ok(pass.resolution)
    }
}

/// State of one resolution pass.
struct Pass<'a> {
    options: &'a ResolveOptions,
    visited: HashSet<PathBuf>,
    resolution: Resolution,
}

impl Pass<'_> {
    fn visit(&mut self, path: &Path, depth: usize) {
        let path = canonicalize(path, self.options.home_dir.as_deref());

        if depth > self.options.max_depth {
            self.resolution.diagnostics.push(Diagnostic::DepthExceeded {
                path,
                depth: self.options.max_depth,
            });
            return;
        }

        if !self.visited.insert(path.clone()) {
            self.resolution
                .diagnostics
                .push(Diagnostic::CircularInclude { path });
            return;
        }

        let contents = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(error) => {
                self.resolution
                    .diagnostics
                    .push(Diagnostic::Unreadable { path, error });
                return;
            }
        };

        debug!(path = %path.display(), depth, "parsing ssh config");
        self.resolution.files.push(path.clone());

        for line in contents.lines() {
            self.parse_line(line, &path, depth);
        }
    }

    fn parse_line(&mut self, line: &str, file: &Path, depth: usize) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = tokens.split_first() else {
            return;
        };

        // Directives without arguments are skipped silently
        if args.is_empty() {
            return;
        }

        match keyword.to_lowercase().as_str() {
            "include" => self.include(args, file, depth),
            "host" => self
                .resolution
                .hosts
                .extend(args.iter().filter_map(|alias| HostEntry::from_alias(alias))),
            _ => {}
        }
    }

    fn include(&mut self, args: &[&str], file: &Path, depth: usize) {
        let pattern = include::pattern_from_tokens(args);
        let pattern = include::expand_tilde(&pattern, self.options.home_dir.as_deref());
        let base_dir = file.parent().unwrap_or(file);

        let files = match include::expand(&pattern, base_dir) {
            Ok(files) => files,
            Err(error) => {
                self.resolution
                    .diagnostics
                    .push(Diagnostic::InvalidPattern {
                        pattern,
                        from: file.to_path_buf(),
                        error,
                    });
                return;
            }
        };

        if files.is_empty() {
            self.resolution
                .diagnostics
                .push(Diagnostic::IncludeUnresolvable {
                    pattern,
                    from: file.to_path_buf(),
                });
            return;
        }

        debug!(%pattern, count = files.len(), "include resolved");
        for included in files {
            self.visit(&included, depth + 1);
        }
    }
}

/// Turns `path` into the identity key used by the visited set.
///
/// Existing files are resolved through the filesystem, so symlinks and `..`
/// segments collapse. Missing files keep their lexical absolute form.
fn canonicalize(path: &Path, home: Option<&Path>) -> PathBuf {
    let expanded = match (home, path.strip_prefix("~")) {
        (Some(home), Ok(rest)) => home.join(rest),
        _ => path.to_path_buf(),
    };

    let absolute = std::path::absolute(&expanded).unwrap_or(expanded);
    fs::canonicalize(&absolute).unwrap_or(absolute)
}
