//! Path helpers for locating the posts file and log output.
//!
//! Paths coming from configuration may start with `~`; they are expanded
//! against `$HOME` here. The default data directory follows the XDG base
//! directory layout.

use std::path::PathBuf;

/// Returns the data directory for blogview files.
///
/// Resolves to `$XDG_DATA_HOME/blogview` when `XDG_DATA_HOME` is set, otherwise
/// `~/.local/share/blogview`. Falls back to a relative `.blogview` directory
/// when no home directory is known.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(data_home) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(data_home).join("blogview");
    }

    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".blogview"),
        |home| PathBuf::from(home).join(".local").join("share").join("blogview"),
    )
}

/// Default location of the posts file: `posts.json` in [`get_data_dir`].
#[must_use]
pub fn default_posts_path() -> PathBuf {
    get_data_dir().join("posts.json")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use blogview::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = std::env::var_os("HOME") else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}
