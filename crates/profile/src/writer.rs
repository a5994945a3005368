//! Writing profiles to disk in iTerm2's dynamic profile layout.
//!
//! Two layouts exist: every profile in one file ([`write_single_file`]) or
//! one file per profile ([`write_multi_file`]). Both emit pretty-printed JSON
//! with stable key order so repeated runs diff cleanly.

use crate::error::WriteError;
use crate::types::{ProfileDocument, ProfileRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name used for single-file output.
pub const DEFAULT_FILE_NAME: &str = "ssh-hosts.json";

const EXTENSION: &str = "json";

/// Writes all `records` to `path` as one `{"Profiles": [...]}` document.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error naming the target path if a directory cannot be created
/// or the file cannot be written.
pub fn write_single_file(records: &[ProfileRecord], path: &Path) -> Result<PathBuf, WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }

    write_document(records.to_vec(), path)?;
    Ok(path.to_path_buf())
}

/// Writes each record to its own file inside `dir`.
///
/// File names come from [`file_stem`] plus a `.json` extension. Returns the
/// written paths in record order.
///
/// # Errors
///
/// Returns an error naming the target path on the first failure. Files
/// written before the failure are left in place.
pub fn write_multi_file(records: &[ProfileRecord], dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    create_dir(dir)?;

    records
        .iter()
        .map(|record| {
            let path = dir.join(format!("{}.{EXTENSION}", file_stem(&record.name)));
            write_document(vec![record.clone()], &path)?;
            Ok(path)
        })
        .collect()
}

/// Derives a file name stem from a profile name.
///
/// Path separators become `_` and the wildcard `*` becomes `wildcard`.
pub fn file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "_").replace('*', "wildcard")
}

fn create_dir(dir: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_document(profiles: Vec<ProfileRecord>, path: &Path) -> Result<(), WriteError> {
    let document = ProfileDocument { profiles };

    let mut json =
        serde_json::to_string_pretty(&document).map_err(|source| WriteError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    json.push('\n');

    fs::write(path, json).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = document.profiles.len(), "wrote profiles");
    Ok(())
}
