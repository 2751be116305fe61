//! Path manipulation utilities.
//!
//! Resolves the data directory used for trace output, expands `~` in
//! configured paths, and maps resource locators from the catalog onto files
//! below the asset root.

use std::env;
use std::path::{Path, PathBuf};

/// Returns the data directory for Folio output files.
///
/// Resolution order:
/// 1. `$FOLIO_DATA_DIR`
/// 2. `$XDG_DATA_HOME/folio`
/// 3. `$HOME/.local/share/folio`
/// 4. `./.folio` when no home directory is known
///
/// The directory is not created here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os("FOLIO_DATA_DIR").filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(xdg) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("folio");
    }
    env::var_os("HOME").filter(|v| !v.is_empty()).map_or_else(
        || PathBuf::from(".folio"),
        |home| PathBuf::from(home).join(".local").join("share").join("folio"),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and every path when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use folio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = env::var_os("HOME").filter(|v| !v.is_empty()) else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else if path == "~" {
        home.into_owned()
    } else {
        path.to_string()
    }
}

/// Maps a catalog resource locator onto a file below `root`.
///
/// Locators are site-absolute (`/images/a.jpg`); the leading slashes are
/// stripped so the result always stays below the root.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use folio::infrastructure::resolve_asset;
///
/// let path = resolve_asset(Path::new("public"), "/images/doggo.jpg");
/// assert_eq!(path, Path::new("public/images/doggo.jpg"));
/// ```
#[must_use]
pub fn resolve_asset(root: &Path, src: &str) -> PathBuf {
    root.join(src.trim_start_matches('/'))
}
