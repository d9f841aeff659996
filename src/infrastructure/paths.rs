//! Path utilities for locating directory data on the host.
//!
//! Handles tilde expansion and resolution of the default data directory where
//! the JSON store, profile pictures, exports, and logs live.

use std::path::PathBuf;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "EMPLOYEE_DIRECTORY_DATA_DIR";

/// Returns the default data directory.
///
/// Resolution order:
/// 1. `$EMPLOYEE_DIRECTORY_DATA_DIR` if set and non-empty
/// 2. `$HOME/.local/share/employee-directory`
/// 3. `./employee-directory` when `HOME` is unset
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from("employee-directory"),
        |home| {
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("employee-directory")
        },
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use employee_directory::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME") else {
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
