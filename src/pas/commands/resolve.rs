use crate::pas::context::ShellContext;
use crate::pas::error::{Result, ShellError};
use log::debug;
use std::env;
use std::path::PathBuf;

/// Finds the executable to run for `name`.
///
/// A name containing `/` is checked as-is (relative to the session cwd);
/// a bare name is looked up in the session search path, first hit wins.
pub fn resolve_executable(name: &str, ctx: &ShellContext) -> Result<PathBuf> {
    let found = if name.contains('/') {
        which::which_in(name, None::<&str>, &ctx.cwd).ok()
    } else {
        search_path_lookup(name, ctx)
    };

    debug!("resolved '{}' -> {:?}", name, found);
    found.ok_or_else(|| ShellError::CommandNotFound {
        name: name.to_string(),
    })
}

/// Probes only the search-path directories, never the cwd.
pub fn search_path_lookup(name: &str, ctx: &ShellContext) -> Option<PathBuf> {
    if name.is_empty() || name.contains('/') || ctx.search_path.is_empty() {
        return None;
    }
    let paths = env::join_paths(&ctx.search_path).ok()?;
    which::which_in(name, Some(paths), &ctx.cwd).ok()
}
