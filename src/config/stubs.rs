//! `[stubs]` section: where the bundled scripting-API stubs live.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths};

/// Resolved `[stubs]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubsSection {
    /// Directory holding one `v###` subdirectory per bundled revision.
    pub root: Option<PathBuf>,
}

/// `[stubs]` section as written in the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStubsSection {
    pub root: Option<PathBuf>,
}

/// Parse and validate the `[stubs]` section.
pub fn parse_stubs_section(
    raw: Option<RawStubsSection>,
    path: &Path,
) -> Result<StubsSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    if let Some(root) = &raw.root {
        if !paths::is_nonempty_absolute(root) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "stubs.root",
                message: format!("`{}` must be an absolute path", root.display()),
            });
        }
    }

    Ok(StubsSection { root: raw.root })
}
