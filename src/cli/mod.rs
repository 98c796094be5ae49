//! CLI entrypoint module structure.
use anyhow::Result;
use serde_json::json;

use crate::{
    config::LauncherConfig,
    ide::{self, IdeConfigRequest},
    lib::fs::SettingsUpdateStatus,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, IdeConfigArgs, LaunchArgs, ParsedCommand};
pub use profile::{load_config, resolve_profile, LaunchProfile};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand, config: &LauncherConfig) -> Result<String> {
    match command {
        CliCommand::IdeConfig(args) => {
            let request = IdeConfigRequest {
                editor: args.ide,
                scope: args.target,
                revision: args.revision,
                stubs_root: args.stubs_root,
                dry_run: args.dry_run,
            };
            let outcome = ide::configure(&request, &config.stubs)?;

            let (status, message) = match outcome.status {
                SettingsUpdateStatus::Planned => {
                    ("planned", "dry-run: no settings were modified")
                }
                SettingsUpdateStatus::Updated => {
                    ("updated", "stub path written into the editor settings")
                }
                SettingsUpdateStatus::AlreadySet => (
                    "already_set",
                    "stub path already present; settings left untouched",
                ),
            };

            let payload = json!({
                "status": status,
                "editor": request.editor.as_str(),
                "scope": request.scope.as_str(),
                "revision": outcome.revision,
                "stub_dir": outcome.stub_dir.to_string_lossy(),
                "settings_path": outcome.settings_path.to_string_lossy(),
                "message": message
            });

            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}
