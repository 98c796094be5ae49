//! VS Code settings-file plumbing.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::lib::{
    errors::IdeConfigError,
    fs::{read_json_object, write_json_object, SettingsReadError, SettingsUpdateStatus},
    paths,
};

use super::SettingsScope;

/// Settings key listing extra analysis paths for the Python extension.
pub const EXTRA_PATHS_KEY: &str = "python.analysis.extraPaths";

const APPDATA_ENV: &str = "APPDATA";

/// Settings file targeted by a scope.
///
/// User scope points at the per-user VS Code profile; workspace scope points
/// at `.vscode/settings.json` under the current directory.
pub fn settings_path(scope: SettingsScope) -> Result<PathBuf, IdeConfigError> {
    match scope {
        SettingsScope::User => Ok(user_settings_dir()?.join("settings.json")),
        SettingsScope::Workspace => {
            let cwd = env::current_dir().map_err(|source| IdeConfigError::SettingsIo {
                path: PathBuf::from("."),
                source,
            })?;
            Ok(cwd.join(".vscode").join("settings.json"))
        }
    }
}

fn user_settings_dir() -> Result<PathBuf, IdeConfigError> {
    if cfg!(windows) {
        let roaming = env::var_os(APPDATA_ENV)
            .map(PathBuf::from)
            .or_else(|| paths::home_dir().map(|home| home.join("AppData").join("Roaming")))
            .ok_or(IdeConfigError::HomeUnavailable)?;
        return Ok(roaming.join("Code").join("User"));
    }

    let home = paths::home_dir().ok_or(IdeConfigError::HomeUnavailable)?;
    if cfg!(target_os = "macos") {
        Ok(home
            .join("Library")
            .join("Application Support")
            .join("Code")
            .join("User"))
    } else {
        Ok(home.join(".config").join("Code").join("User"))
    }
}

/// Merge `stub_dir` into the extra-paths array of `settings_path`.
///
/// Existing settings are preserved and the update is idempotent; a non-array
/// value under the key is replaced.
pub fn apply_stub_path(
    settings_path: &Path,
    stub_dir: &Path,
    dry_run: bool,
) -> Result<SettingsUpdateStatus, IdeConfigError> {
    let mut settings = read_json_object(settings_path).map_err(|err| match err {
        SettingsReadError::Io(source) => IdeConfigError::SettingsIo {
            path: settings_path.to_path_buf(),
            source,
        },
        SettingsReadError::Parse(source) => IdeConfigError::SettingsParse {
            path: settings_path.to_path_buf(),
            source,
        },
    })?;

    let stub_entry = stub_dir.display().to_string();
    let mut extra_paths = settings
        .get(EXTRA_PATHS_KEY)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if extra_paths
        .iter()
        .any(|value| value.as_str() == Some(stub_entry.as_str()))
    {
        return Ok(SettingsUpdateStatus::AlreadySet);
    }

    extra_paths.push(Value::String(stub_entry));
    settings.insert(EXTRA_PATHS_KEY.to_string(), Value::Array(extra_paths));

    if dry_run {
        return Ok(SettingsUpdateStatus::Planned);
    }

    write_json_object(settings_path, &settings).map_err(|source| IdeConfigError::SettingsIo {
        path: settings_path.to_path_buf(),
        source,
    })?;
    Ok(SettingsUpdateStatus::Updated)
}
