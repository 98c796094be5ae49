//! Bundled stub package discovery and revision resolution.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::lib::errors::IdeConfigError;

/// The stub revisions bundled under one root directory.
///
/// Each revision lives in a subdirectory named `v###` (e.g. `v241`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubCatalog {
    root: PathBuf,
    revisions: Vec<u32>,
}

/// A revision picked from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRevision {
    pub revision: u32,
    /// False when the requested revision was substituted by the closest
    /// bundled one; callers should surface a warning.
    pub exact: bool,
}

impl StubCatalog {
    /// Scan `root` for bundled revisions.
    pub fn scan(root: &Path) -> Result<Self, IdeConfigError> {
        if !root.is_dir() {
            return Err(IdeConfigError::StubsRootMissing {
                path: root.to_path_buf(),
            });
        }

        let entries = fs::read_dir(root).map_err(|source| IdeConfigError::StubsRead {
            path: root.to_path_buf(),
            source,
        })?;

        let mut revisions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| IdeConfigError::StubsRead {
                path: root.to_path_buf(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(revision) = entry.file_name().to_str().and_then(parse_revision_dir) {
                revisions.push(revision);
            }
        }

        if revisions.is_empty() {
            return Err(IdeConfigError::NoStubRevisions {
                path: root.to_path_buf(),
            });
        }
        revisions.sort_unstable();

        Ok(Self {
            root: root.to_path_buf(),
            revisions,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bundled revisions, oldest first.
    pub fn revisions(&self) -> &[u32] {
        &self.revisions
    }

    /// Directory holding the stubs for `revision`.
    pub fn stub_dir(&self, revision: u32) -> PathBuf {
        self.root.join(format!("v{revision}"))
    }

    /// Pick the bundled revision for a request.
    ///
    /// No request means the newest bundle. A request newer than the newest
    /// bundle, or falling in a gap, resolves to the closest older bundle
    /// (flagged non-exact). A request older than the oldest bundle fails.
    pub fn resolve(&self, requested: Option<u32>) -> Result<ResolvedRevision, IdeConfigError> {
        let Some(&newest) = self.revisions.last() else {
            return Err(IdeConfigError::NoStubRevisions {
                path: self.root.clone(),
            });
        };
        let Some(&minimum) = self.revisions.first() else {
            return Err(IdeConfigError::NoStubRevisions {
                path: self.root.clone(),
            });
        };

        let Some(requested) = requested else {
            return Ok(ResolvedRevision {
                revision: newest,
                exact: true,
            });
        };

        if self.revisions.contains(&requested) {
            return Ok(ResolvedRevision {
                revision: requested,
                exact: true,
            });
        }
        if requested < minimum {
            return Err(IdeConfigError::RevisionBelowMinimum { requested, minimum });
        }

        let closest = self
            .revisions
            .iter()
            .copied()
            .filter(|&revision| revision < requested)
            .last()
            .unwrap_or(newest);
        Ok(ResolvedRevision {
            revision: closest,
            exact: false,
        })
    }
}

fn parse_revision_dir(name: &str) -> Option<u32> {
    let suffix = name.strip_prefix('v')?;
    if suffix.len() != 3 {
        return None;
    }
    suffix.parse().ok()
}
