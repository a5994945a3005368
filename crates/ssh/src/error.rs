use std::io;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Diagnostics
// ============================================================================

/// A non-fatal problem found while resolving a config tree.
///
/// Diagnostics never stop traversal. The affected branch contributes no
/// hosts and resolution carries on with the next line of the including file.
#[derive(Error, Debug)]
pub enum Diagnostic {
    /// An `Include` pattern matched no regular file.
    #[error("include '{pattern}' in {} matched no files", .from.display())]
    IncludeUnresolvable {
        /// The pattern after unquoting and `~` expansion.
        pattern: String,
        /// The file containing the `Include` line.
        from: PathBuf,
    },

    /// An `Include` argument is not a valid glob pattern.
    #[error("include '{pattern}' in {} is not a valid pattern: {error}", .from.display())]
    InvalidPattern {
        /// The pattern after unquoting and `~` expansion.
        pattern: String,
        /// The file containing the `Include` line.
        from: PathBuf,
        /// Why the pattern was rejected.
        #[source]
        error: glob::PatternError,
    },

    /// A config file is missing or could not be read.
    #[error("could not read {}: {error}", .path.display())]
    Unreadable {
        /// Canonical path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// A config file was reached a second time in the same pass.
    #[error("skipping already-visited file: {}", .path.display())]
    CircularInclude {
        /// Canonical path of the file.
        path: PathBuf,
    },

    /// Include nesting went past the configured limit.
    #[error("include depth limit {depth} reached at {}", .path.display())]
    DepthExceeded {
        /// The file that would have been parsed.
        path: PathBuf,
        /// The depth limit.
        depth: usize,
    },
}

// ============================================================================
// Resolve Error
// ============================================================================

/// Error that aborts a resolution pass.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The top-level config file does not exist.
    #[error("SSH config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
}
