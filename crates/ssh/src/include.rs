//! `Include` argument handling: unquoting, `~` expansion and globbing.

use glob::{MatchOptions, PatternError};
use std::path::{Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Builds the include pattern from the directive's argument tokens.
///
/// Tokens are re-joined with single spaces so a pattern that was split on
/// whitespace survives, then one layer of matching quotes is removed.
pub(crate) fn pattern_from_tokens(tokens: &[&str]) -> String {
    let joined = tokens.join(" ");
    unquote(&joined).to_string()
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Replaces a leading `~` with `home`. Left untouched when no home is known.
pub(crate) fn expand_tilde(pattern: &str, home: Option<&Path>) -> String {
    shellexpand::tilde_with_context(pattern, || {
        home.map(|home| home.to_string_lossy().into_owned())
    })
    .into_owned()
}

/// Expands `pattern` into the regular files it names, sorted by path.
///
/// Relative patterns are anchored at `base_dir`, the directory of the file
/// holding the `Include` line.
pub(crate) fn expand(pattern: &str, base_dir: &Path) -> Result<Vec<PathBuf>, PatternError> {
    let anchored = if Path::new(pattern).is_absolute() {
        PathBuf::from(pattern)
    } else {
        base_dir.join(pattern)
    };

    let mut files: Vec<PathBuf> = glob::glob_with(&anchored.to_string_lossy(), MATCH_OPTIONS)?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    Ok(files)
}
