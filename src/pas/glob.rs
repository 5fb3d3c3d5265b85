use ::glob::{MatchOptions, Pattern};
use log::{trace, warn};
use std::fs;
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

pub fn has_wildcard(token: &str) -> bool {
    token.contains('*') || token.contains('?') || token.contains('[')
}

/// Expands a wildcard token against the entries of its directory.
///
/// The token is split at its last `/`; only the final component is a
/// pattern. Matches come back in directory-listing order, prefixed with the
/// directory part when there was one. No match, a bad pattern or an
/// unreadable directory all yield the original token.
pub fn expand_glob(token: &str, cwd: &Path) -> Vec<String> {
    let (dir_part, file_pattern) = match token.rfind('/') {
        Some(idx) => (Some(&token[..idx]), &token[idx + 1..]),
        None => (None, token),
    };

    let pattern = match Pattern::new(file_pattern) {
        Ok(p) => p,
        Err(e) => {
            trace!("invalid pattern '{}': {}", file_pattern, e);
            return vec![token.to_string()];
        }
    };

    let listing_dir = match dir_part {
        Some("") => cwd.join("/"),
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };

    let entries = match fs::read_dir(&listing_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot list {}: {}", listing_dir.display(), e);
            return vec![token.to_string()];
        }
    };

    let mut matches = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if pattern.matches_with(name, MATCH_OPTIONS) {
            trace!("'{}' matched {}", file_pattern, name);
            matches.push(match dir_part {
                Some(dir) => format!("{}/{}", dir, name),
                None => name.to_string(),
            });
        }
    }

    if matches.is_empty() {
        // No matches found, keep original argument (bash behavior)
        matches.push(token.to_string());
    }
    matches
}
