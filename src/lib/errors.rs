use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Invalid launch option combinations.
///
/// Every variant is fatal: the caller has to fix the request and rebuild.
/// There is no partial plan and no retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaunchConfigError {
    #[error("Cannot open a project file (--project-file) and run an input script (--input-script) in the same session")]
    ProjectFileWithScript,
    #[error("Opening a project file (--project-file) requires graphical mode (--graphical)")]
    ProjectFileRequiresGraphical,
    #[error("Cannot start a server (--port) while opening a project file (--project-file)")]
    PortWithProjectFile,
    #[error("Cannot start a server (--port) while running an input script (--input-script)")]
    PortWithScript,
    #[error("Batch mode requires an input script (--input-script) or a server port (--port)")]
    BatchMissingWork,
    #[error("Script arguments (--script-args) require an input script (--input-script)")]
    ScriptArgsWithoutScript,
    #[error("Script arguments must not contain a double quote: {args}")]
    ScriptArgsDoubleQuote { args: String },
}

/// Failures while discovering installed Mechanical releases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("No Mechanical installation found (no AWP_ROOT environment variable is set)")]
    NoInstallations,
    #[error("Mechanical {requested} is not installed (installed releases: {installed:?})")]
    VersionNotInstalled { requested: u32, installed: Vec<u32> },
}

/// Failures while pointing an editor at the bundled stubs.
#[derive(Debug, Error)]
pub enum IdeConfigError {
    #[error("Stub directory {path} does not exist")]
    StubsRootMissing { path: PathBuf },
    #[error("Failed to scan stub directory {path}: {source}")]
    StubsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No stub revisions found under {path}")]
    NoStubRevisions { path: PathBuf },
    #[error("Stubs are not available for revision {requested}; the oldest bundled revision is {minimum}")]
    RevisionBelowMinimum { requested: u32, minimum: u32 },
    #[error("Could not resolve the home directory (HOME/USERPROFILE unset)")]
    HomeUnavailable,
    #[error("I/O failed for settings file {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Settings file {path} is not a JSON object: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while running the launched process.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to spawn {executable}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for {executable}: {source}")]
    Wait {
        executable: String,
        #[source]
        source: io::Error,
    },
}
