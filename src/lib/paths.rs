//! Shared platform/path helpers reused across modules.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Environment variable name for the user home directory.
pub const HOME_ENV: &str = "HOME";
/// Windows fallback for the home directory.
pub const USERPROFILE_ENV: &str = "USERPROFILE";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Name of the per-user data-root variable redirected by app-data isolation.
///
/// Mechanical keys its user profile off the temp directory on Windows and off
/// the home directory everywhere else.
pub fn user_data_env_var() -> &'static str {
    if cfg!(windows) {
        "TEMP"
    } else {
        "HOME"
    }
}

/// Resolve the user home directory from the process environment.
pub fn home_dir() -> Option<PathBuf> {
    home_dir_from(env::var_os(HOME_ENV), env::var_os(USERPROFILE_ENV))
}

/// Resolve the home directory from explicit environment values (testable helper).
fn home_dir_from(home: Option<OsString>, userprofile: Option<OsString>) -> Option<PathBuf> {
    if let Some(home) = home.filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(home));
    }

    userprofile
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
