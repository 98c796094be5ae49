use std::path::PathBuf;

use crate::lib::errors::LaunchConfigError;

/// Session kind derived from the `graphical` switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Interactive UI session; never self-terminates.
    Graphical,
    /// Non-interactive session that runs a script or serves RPC and exits.
    Batch,
}

impl LaunchMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LaunchMode::Graphical => "graphical",
            LaunchMode::Batch => "batch",
        }
    }
}

/// Everything needed to start one Mechanical session.
///
/// The request is immutable input to [`build_launch_plan`]; option conflicts
/// are rejected by [`LaunchRequest::validate`] before any token is emitted.
///
/// [`build_launch_plan`]: crate::launcher::plan::build_launch_plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Path of the Mechanical executable to invoke.
    pub executable: PathBuf,
    /// Release identifier, e.g. 231 for 2023 R1 or 241 for 2024 R1.
    pub version: u32,
    /// Start the interactive UI instead of a batch session.
    pub graphical: bool,
    /// Listen for RPC connections on this port.
    pub port: Option<u16>,
    /// Script executed on startup.
    pub input_script: Option<PathBuf>,
    /// Raw comma-separated arguments forwarded to the input script.
    pub script_args: Option<String>,
    /// Project file opened on startup (graphical mode only).
    pub project_file: Option<PathBuf>,
    /// Pause the process on startup until a debugger attaches.
    pub debug: bool,
    /// Run with an isolated, throwaway user profile directory.
    pub private_appdata: bool,
    /// Keep the launcher welcome screen instead of jumping straight into
    /// Mechanical.
    pub show_welcome_screen: bool,
    /// Raw `;`-separated feature flag names.
    pub features: Option<String>,
    /// Terminate after the input script completes. Batch sessions always
    /// terminate; see the exit handling in the plan builder.
    pub exit: Option<bool>,
}

impl LaunchRequest {
    /// Minimal valid request; callers fill in the options they need.
    pub fn new(executable: impl Into<PathBuf>, version: u32) -> Self {
        Self {
            executable: executable.into(),
            version,
            graphical: false,
            port: None,
            input_script: None,
            script_args: None,
            project_file: None,
            debug: false,
            private_appdata: false,
            show_welcome_screen: false,
            features: None,
            exit: None,
        }
    }

    pub fn mode(&self) -> LaunchMode {
        if self.graphical {
            LaunchMode::Graphical
        } else {
            LaunchMode::Batch
        }
    }

    /// Check the option invariants, returning the first violation.
    ///
    /// The checks run in a fixed order so callers always see the same error
    /// for the same request.
    pub fn validate(&self) -> Result<(), LaunchConfigError> {
        if self.project_file.is_some() && self.input_script.is_some() {
            return Err(LaunchConfigError::ProjectFileWithScript);
        }
        if self.project_file.is_some() && !self.graphical {
            return Err(LaunchConfigError::ProjectFileRequiresGraphical);
        }
        if self.port.is_some() {
            if self.project_file.is_some() {
                return Err(LaunchConfigError::PortWithProjectFile);
            }
            if self.input_script.is_some() {
                return Err(LaunchConfigError::PortWithScript);
            }
        }
        if !self.graphical && self.input_script.is_none() && self.port.is_none() {
            return Err(LaunchConfigError::BatchMissingWork);
        }
        if let Some(script_args) = &self.script_args {
            if self.input_script.is_none() {
                return Err(LaunchConfigError::ScriptArgsWithoutScript);
            }
            // A raw double quote would make the wrapped -ScriptArgs token
            // ambiguous; single quotes pass through untouched.
            if script_args.contains('"') {
                return Err(LaunchConfigError::ScriptArgsDoubleQuote {
                    args: script_args.clone(),
                });
            }
        }

        Ok(())
    }
}
