//! CLI argument definitions.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::ide::{EditorKind, SettingsScope};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Launch(LaunchArgs),
    Cli(CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Point an editor's Python analysis at the bundled Mechanical stubs.
    #[command(name = "ide-config")]
    IdeConfig(IdeConfigArgs),
}

/// Arguments for `ide-config`.
#[derive(Debug, Clone, Args)]
#[command(
    about = "Write the bundled stub path into an editor settings file",
    after_help = "Hint: use `mechlaunch ide-config --dry-run` to preview the planned settings change without modifying files."
)]
pub struct IdeConfigArgs {
    /// Editor to configure.
    #[arg(long, value_enum, default_value_t = EditorKind::Vscode)]
    pub ide: EditorKind,
    /// Update the per-user or the workspace settings file.
    #[arg(long, value_enum, default_value_t = SettingsScope::User)]
    pub target: SettingsScope,
    /// Stub revision to point at; defaults to the newest bundled one.
    #[arg(short = 'r', long)]
    pub revision: Option<u32>,
    /// Directory holding the bundled stub revisions.
    #[arg(long)]
    pub stubs_root: Option<PathBuf>,
    /// Show the planned settings change without touching files.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launch Ansys Mechanical in batch or graphical mode",
    long_about = None
)]
pub struct LaunchArgs {
    /// Release to launch as a three-digit identifier (for example 241 for
    /// 2024 R1); defaults to the newest installed release.
    #[arg(short = 'r', long)]
    pub revision: Option<u32>,
    /// Explicit executable path, skipping installation discovery
    /// (requires --revision).
    #[arg(long)]
    pub exe: Option<PathBuf>,
    /// Start the interactive UI instead of a batch session.
    #[arg(short, long)]
    pub graphical: bool,
    /// Listen for RPC connections on this port.
    #[arg(long)]
    pub port: Option<u16>,
    /// Script to run on startup.
    #[arg(short, long)]
    pub input_script: Option<PathBuf>,
    /// Comma-separated arguments forwarded to the input script.
    #[arg(long)]
    pub script_args: Option<String>,
    /// Project file to open (graphical mode only).
    #[arg(short, long)]
    pub project_file: Option<PathBuf>,
    /// Pause the process on startup until a debugger attaches.
    #[arg(long, default_value_t = false)]
    pub debug: bool,
    /// Run with an isolated, throwaway user profile directory.
    #[arg(long, default_value_t = false)]
    pub private_appdata: bool,
    /// Keep the launcher welcome screen instead of opening Mechanical
    /// directly.
    #[arg(long, default_value_t = false)]
    pub show_welcome_screen: bool,
    /// Semicolon-separated feature flag names to enable.
    #[arg(long)]
    pub features: Option<String>,
    /// Terminate after the input script completes (batch sessions always
    /// terminate).
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub exit: Option<bool>,
    /// Print the launch plan without starting the process.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Path to mechlaunch.toml (overrides MECHLAUNCH_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchArgs {
    /// Split CLI args into launch mode or utility command mode.
    pub fn into_command(mut self) -> ParsedCommand {
        match self.command.take() {
            Some(command) => ParsedCommand::Cli(command),
            None => ParsedCommand::Launch(self),
        }
    }
}
