//! Version thresholds gating launch behavior differences between releases.

use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// First release that no longer takes the legacy splash/tab-control flags.
pub const DEFAULT_LEGACY_SPLASH_BEFORE: u32 = 232;
/// First release (2024 R1) where the exit switch is meaningful.
pub const DEFAULT_EXIT_SUPPORTED_FROM: u32 = 241;

/// Release thresholds consulted while emitting launch tokens.
///
/// These are data, not code: older installations can be accommodated by
/// editing the configuration file instead of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPolicy {
    /// Releases below this get `-nosplash` and `-notabctrl`.
    pub legacy_splash_before: u32,
    /// Releases below this warn when the exit switch can have no effect.
    pub exit_supported_from: u32,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self {
            legacy_splash_before: DEFAULT_LEGACY_SPLASH_BEFORE,
            exit_supported_from: DEFAULT_EXIT_SUPPORTED_FROM,
        }
    }
}

/// `[versions]` section as written in the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVersionsSection {
    pub legacy_splash_before: Option<u32>,
    pub exit_supported_from: Option<u32>,
}

/// Parse and validate the `[versions]` section.
pub fn parse_versions_section(
    raw: Option<RawVersionsSection>,
    path: &Path,
) -> Result<VersionPolicy, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = VersionPolicy::default();

    let legacy_splash_before = raw.legacy_splash_before.unwrap_or(defaults.legacy_splash_before);
    validate_release_id(legacy_splash_before, "versions.legacy_splash_before", path)?;

    let exit_supported_from = raw.exit_supported_from.unwrap_or(defaults.exit_supported_from);
    validate_release_id(exit_supported_from, "versions.exit_supported_from", path)?;

    Ok(VersionPolicy {
        legacy_splash_before,
        exit_supported_from,
    })
}

/// Release identifiers are three digits (e.g. 241 for 2024 R1).
fn validate_release_id(value: u32, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if (100..=999).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: format!("{value} is not a three-digit release identifier"),
        })
    }
}
