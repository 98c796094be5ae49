//! Translate a [`LaunchRequest`] into the argument vector and environment
//! overlay the Mechanical executable expects.

use std::{collections::BTreeMap, fmt, io};

use thiserror::Error;

use crate::{
    config::VersionPolicy,
    lib::{errors::LaunchConfigError, paths},
};

use super::{
    features,
    request::{LaunchMode, LaunchRequest},
};

/// Environment variable that makes Mechanical wait for a debugger attach.
pub const DEBUG_STOP_ENV: &str = "WBDEBUG_STOP";

const APPDATA_DIR_PREFIX: &str = "mechlaunch-appdata-";

/// Failure while building a launch plan.
#[derive(Debug, Error)]
pub enum LaunchPlanError {
    #[error(transparent)]
    Config(#[from] LaunchConfigError),
    #[error("Failed to create the private app-data directory: {source}")]
    AppDataDir {
        #[source]
        source: io::Error,
    },
}

/// Non-fatal findings surfaced while building a plan.
///
/// The builder stays silent on its own; the caller decides how to present
/// these (the CLI logs them through `tracing`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchWarning {
    /// Feature names outside the allow-list, forwarded verbatim.
    UnknownFeatureFlags { names: Vec<String> },
    /// The exit switch was requested in a position where it cannot act.
    ExitHasNoEffect { version: u32 },
}

impl fmt::Display for LaunchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchWarning::UnknownFeatureFlags { names } => write!(
                f,
                "Unrecognized feature flags are forwarded to Mechanical unmodified: {}",
                names.join(";")
            ),
            LaunchWarning::ExitHasNoEffect { version } => write!(
                f,
                "Release {version} ignores the exit switch outside a batch session with an input script"
            ),
        }
    }
}

/// Ordered argument vector plus environment for one Mechanical session.
///
/// `args[0]` is the executable itself, matching the argv handed to the OS.
/// `env` is a full environment: a copy of the base map the caller passed in,
/// with the launch overrides applied. The base map is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub warnings: Vec<LaunchWarning>,
}

impl LaunchPlan {
    /// Program to invoke.
    pub fn executable(&self) -> &str {
        &self.args[0]
    }

    /// Arguments following the program.
    pub fn arguments(&self) -> &[String] {
        &self.args[1..]
    }
}

/// Build the launch plan for `request`.
///
/// Validation runs first; no tokens are emitted for an invalid request.
/// Aside from allocating the private app-data directory when asked to, the
/// builder is a pure function of its inputs.
pub fn build_launch_plan(
    request: &LaunchRequest,
    policy: &VersionPolicy,
    base_env: &BTreeMap<String, String>,
) -> Result<LaunchPlan, LaunchPlanError> {
    request.validate()?;

    let mode = request.mode();
    let mut args = Vec::new();
    let mut warnings = Vec::new();

    args.push(request.executable.display().to_string());
    if mode == LaunchMode::Batch {
        args.push("-b".to_string());
    }
    // -AppModeMech skips the launcher welcome screen and opens Mechanical
    // directly; batch sessions take it regardless.
    if !(request.graphical && request.show_welcome_screen) {
        args.push("-AppModeMech".to_string());
    }
    args.push("-DSApplet".to_string());
    if request.version < policy.legacy_splash_before {
        args.push("-nosplash".to_string());
        args.push("-notabctrl".to_string());
    }

    if let Some(port) = request.port {
        args.push("-grpc".to_string());
        args.push(port.to_string());
    }
    if let Some(script) = &request.input_script {
        args.push("-script".to_string());
        args.push(script.display().to_string());
    }
    if let Some(script_args) = &request.script_args {
        // Validation already rejected embedded double quotes.
        args.push("-ScriptArgs".to_string());
        args.push(format!("\"{script_args}\""));
    }
    if let Some(project) = &request.project_file {
        args.push("-file".to_string());
        args.push(project.display().to_string());
    }

    if let Some(raw) = &request.features {
        let partition = features::partition(raw, request.version);
        if let Some(token) = partition.known_token() {
            args.push("-featureflags".to_string());
            args.push(token);
        }
        if let Some(token) = partition.unknown_token() {
            warnings.push(LaunchWarning::UnknownFeatureFlags {
                names: partition.unknown_names().to_vec(),
            });
            args.push("-featureflags".to_string());
            args.push(token);
        }
    }

    // Batch script runs always terminate; the switch cannot suppress that,
    // and it cannot force termination anywhere else.
    let exit_applies = mode == LaunchMode::Batch && request.input_script.is_some();
    if exit_applies {
        args.push("-x".to_string());
    } else if request.exit == Some(true) && request.version < policy.exit_supported_from {
        warnings.push(LaunchWarning::ExitHasNoEffect {
            version: request.version,
        });
    }

    let mut env = base_env.clone();
    if request.debug {
        env.insert(DEBUG_STOP_ENV.to_string(), "1".to_string());
    }
    if request.private_appdata {
        let appdata_dir = tempfile::Builder::new()
            .prefix(APPDATA_DIR_PREFIX)
            .tempdir()
            .map_err(|source| LaunchPlanError::AppDataDir { source })?
            .keep();
        env.insert(
            paths::user_data_env_var().to_string(),
            appdata_dir.display().to_string(),
        );
    }

    Ok(LaunchPlan {
        args,
        env,
        warnings,
    })
}
