//! Utilities for reading and updating JSON settings files.

use std::{fs, io, path::Path};

use serde_json::{Map, Value};
use thiserror::Error;

/// Outcome of a settings-file update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsUpdateStatus {
    /// Dry run: the change was computed but nothing was written.
    Planned,
    /// The file was written with the new value.
    Updated,
    /// The value was already present; the file was left untouched.
    AlreadySet,
}

/// Failure while reading a JSON settings file.
#[derive(Debug, Error)]
pub enum SettingsReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Read a JSON object from `path`, or an empty object when the file is absent.
pub fn read_json_object(path: &Path) -> Result<Map<String, Value>, SettingsReadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(err) => return Err(err.into()),
    };

    let value: Value = serde_json::from_str(&raw)?;
    match value {
        Value::Object(object) => Ok(object),
        // A settings file holding a bare non-object (e.g. `null`) is replaced.
        _ => Ok(Map::new()),
    }
}

/// Write a JSON object to `path` pretty-printed, creating parent directories.
pub fn write_json_object(path: &Path, object: &Map<String, Value>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut serialized = serde_json::to_string_pretty(&Value::Object(object.clone()))
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    serialized.push('\n');
    fs::write(path, serialized)
}
