//! Point an editor's Python analysis at the bundled scripting-API stubs.

use std::{
    env,
    path::PathBuf,
};

use clap::ValueEnum;
use tracing::{info, warn};

use crate::{
    config::StubsSection,
    lib::{errors::IdeConfigError, fs::SettingsUpdateStatus, paths},
};

pub mod stubs;
pub mod vscode;

pub use stubs::{ResolvedRevision, StubCatalog};
pub use vscode::{apply_stub_path, settings_path, EXTRA_PATHS_KEY};

/// Environment override for the stubs root directory.
pub const STUBS_ROOT_ENV: &str = "MECHLAUNCH_STUBS_ROOT";

const DEFAULT_STUBS_DIR: &str = ".mechlaunch/stubs";

/// Supported editors.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum EditorKind {
    #[default]
    Vscode,
}

impl EditorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EditorKind::Vscode => "vscode",
        }
    }
}

/// Which settings file to update.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum SettingsScope {
    #[default]
    User,
    Workspace,
}

impl SettingsScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SettingsScope::User => "user",
            SettingsScope::Workspace => "workspace",
        }
    }
}

/// Input to [`configure`].
#[derive(Debug, Clone)]
pub struct IdeConfigRequest {
    pub editor: EditorKind,
    pub scope: SettingsScope,
    pub revision: Option<u32>,
    pub stubs_root: Option<PathBuf>,
    pub dry_run: bool,
}

/// What [`configure`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeConfigOutcome {
    pub revision: u32,
    pub stub_dir: PathBuf,
    pub settings_path: PathBuf,
    pub status: SettingsUpdateStatus,
}

/// Resolve the stubs root: CLI flag, then environment, then configuration
/// file, then `~/.mechlaunch/stubs`.
pub fn resolve_stubs_root(
    cli_override: Option<PathBuf>,
    config: &StubsSection,
) -> Result<PathBuf, IdeConfigError> {
    if let Some(root) = cli_override {
        return Ok(root);
    }
    if let Some(root) = env::var_os(STUBS_ROOT_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(root));
    }
    if let Some(root) = &config.root {
        return Ok(root.clone());
    }

    paths::home_dir()
        .map(|home| home.join(DEFAULT_STUBS_DIR))
        .ok_or(IdeConfigError::HomeUnavailable)
}

/// Resolve a stub revision and write it into the editor settings.
pub fn configure(
    request: &IdeConfigRequest,
    config: &StubsSection,
) -> Result<IdeConfigOutcome, IdeConfigError> {
    let root = resolve_stubs_root(request.stubs_root.clone(), config)?;
    let catalog = StubCatalog::scan(&root)?;
    let resolved = catalog.resolve(request.revision)?;

    if !resolved.exact {
        warn!(
            target: "mechlaunch::ide",
            requested = request.revision,
            resolved = resolved.revision,
            "No stub bundle for the requested revision; using the closest one"
        );
    }

    let stub_dir = catalog.stub_dir(resolved.revision);
    let settings_path = vscode::settings_path(request.scope)?;
    let status = vscode::apply_stub_path(&settings_path, &stub_dir, request.dry_run)?;

    info!(
        target: "mechlaunch::ide",
        editor = request.editor.as_str(),
        scope = request.scope.as_str(),
        revision = resolved.revision,
        settings = %settings_path.display(),
        status = ?status,
        "Editor stub configuration resolved"
    );

    Ok(IdeConfigOutcome {
        revision: resolved.revision,
        stub_dir,
        settings_path,
        status,
    })
}
