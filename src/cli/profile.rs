//! LaunchProfile: CLI arguments resolved against the local environment.
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::{
    config::LauncherConfig,
    launcher::{locate, LaunchRequest},
    lib::errors::ConfigError,
};

use super::args::LaunchArgs;

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub request: LaunchRequest,
    pub dry_run: bool,
}

/// Load configuration honoring a CLI override.
///
/// An explicit `--config` path must exist; otherwise the environment
/// override or the default file is consulted, falling back to built-in
/// defaults when absent.
pub fn load_config(config_override: Option<PathBuf>) -> Result<LauncherConfig, ConfigError> {
    match config_override {
        Some(path) => LauncherConfig::load_from_path(path),
        None => LauncherConfig::load_from_env_or_default(),
    }
}

/// Resolve CLI arguments into a launch profile.
///
/// Without `--exe`, the executable and release come from installation
/// discovery (`AWP_ROOT###`). An explicit executable needs an explicit
/// revision since version-gated behavior cannot be inferred from a path.
pub fn resolve_profile(args: LaunchArgs) -> Result<LaunchProfile> {
    let (executable, version) = match (args.exe.clone(), args.revision) {
        (Some(exe), Some(revision)) => (exe, revision),
        (Some(_), None) => {
            bail!("--exe requires --revision so version-gated flags can be applied")
        }
        (None, requested) => {
            let installation = locate::find_release(requested)?;
            (installation.executable(), installation.version)
        }
    };

    let request = LaunchRequest {
        executable,
        version,
        graphical: args.graphical,
        port: args.port,
        input_script: args.input_script,
        script_args: args.script_args,
        project_file: args.project_file,
        debug: args.debug,
        private_appdata: args.private_appdata,
        show_welcome_screen: args.show_welcome_screen,
        features: args.features,
        exit: args.exit,
    };

    Ok(LaunchProfile {
        request,
        dry_run: args.dry_run,
    })
}
