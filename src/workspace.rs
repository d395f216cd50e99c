//! Target-directory resolution.

use std::path::PathBuf;

use crate::error::{HerdError, Result};

/// Directory under the home directory used when no target is supplied.
pub const DEFAULT_CLONE_DIR: &str = "github-repos";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| HerdError::InvalidConfig("Could not determine home directory".into()))
}

/// The default clone target: `~/github-repos`.
pub fn default_target_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(DEFAULT_CLONE_DIR))
}

/// Expand a leading `~` in a user-supplied path.
///
/// Paths without a tilde pass through untouched; `~user` forms are not
/// supported.
pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    if path == "~" {
        return home_dir();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }
    Ok(PathBuf::from(path))
}
