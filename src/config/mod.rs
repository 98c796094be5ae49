//! Load and validate launcher configuration.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod stubs;
pub mod versions;

pub use stubs::{parse_stubs_section, RawStubsSection, StubsSection};
pub use versions::{
    parse_versions_section, RawVersionsSection, VersionPolicy, DEFAULT_EXIT_SUPPORTED_FROM,
    DEFAULT_LEGACY_SPLASH_BEFORE,
};

const CONFIG_ENV_KEY: &str = "MECHLAUNCH_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "mechlaunch.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub versions: VersionPolicy,
    pub stubs: StubsSection,
    /// File the values came from; `None` when running on built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    versions: Option<RawVersionsSection>,
    stubs: Option<RawStubsSection>,
}

impl LauncherConfig {
    /// Prefer `MECHLAUNCH_CONFIG_PATH` if set; otherwise read `mechlaunch.toml`.
    ///
    /// A missing default file is not an error: the launcher runs on built-in
    /// thresholds. An explicitly configured path must exist.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        let (path, from_env) = match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => (PathBuf::from(value), true),
            _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !from_env && !path.exists() {
            info!(
                target: "mechlaunch::config",
                "No configuration file present; using built-in defaults"
            );
            return Ok(Self::default());
        }

        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "mechlaunch::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "mechlaunch::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "mechlaunch::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        Self::from_raw(raw, path)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let versions = parse_versions_section(raw.versions, &path)?;
        let stubs = parse_stubs_section(raw.stubs, &path)?;

        Ok(Self {
            versions,
            stubs,
            source_path: Some(path),
        })
    }
}
