//! Discover installed Mechanical releases.
//!
//! Every unified install advertises itself through an `AWP_ROOT###`
//! environment variable whose value is the installation root.

use std::{
    env,
    path::PathBuf,
};

use crate::lib::errors::LocateError;

const AWP_ROOT_PREFIX: &str = "AWP_ROOT";

/// One discovered Mechanical installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub version: u32,
    pub root: PathBuf,
}

impl Installation {
    /// Path of the Mechanical executable under this installation root.
    pub fn executable(&self) -> PathBuf {
        if cfg!(windows) {
            self.root
                .join("aisol")
                .join("bin")
                .join("winx64")
                .join("AnsysWBU.exe")
        } else {
            self.root.join("aisol").join(".workbench")
        }
    }
}

/// List installed releases from the process environment, oldest first.
pub fn installed_releases() -> Vec<Installation> {
    installed_releases_from(env::vars())
}

/// List installed releases from explicit environment pairs (testable helper).
fn installed_releases_from(vars: impl Iterator<Item = (String, String)>) -> Vec<Installation> {
    let mut found: Vec<Installation> = vars
        .filter_map(|(key, value)| {
            let suffix = key.strip_prefix(AWP_ROOT_PREFIX)?;
            if suffix.len() != 3 {
                return None;
            }
            let version: u32 = suffix.parse().ok()?;
            if value.trim().is_empty() {
                return None;
            }
            Some(Installation {
                version,
                root: PathBuf::from(value),
            })
        })
        .collect();
    found.sort_by_key(|installation| installation.version);
    found
}

/// Pick the requested release, or the newest installed one.
pub fn find_release(requested: Option<u32>) -> Result<Installation, LocateError> {
    select_release(installed_releases(), requested)
}

fn select_release(
    installed: Vec<Installation>,
    requested: Option<u32>,
) -> Result<Installation, LocateError> {
    match requested {
        None => installed
            .into_iter()
            .last()
            .ok_or(LocateError::NoInstallations),
        Some(version) => {
            if installed.is_empty() {
                return Err(LocateError::NoInstallations);
            }
            installed
                .iter()
                .find(|installation| installation.version == version)
                .cloned()
                .ok_or_else(|| LocateError::VersionNotInstalled {
                    requested: version,
                    installed: installed
                        .iter()
                        .map(|installation| installation.version)
                        .collect(),
                })
        }
    }
}
