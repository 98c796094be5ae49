//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a Mechanical session.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    launch_id: Uuid,
}

impl LaunchSpan {
    /// Start a launch span.
    pub fn start(launch_id: Uuid, mode: &'static str) -> Self {
        let span = info_span!(
            target: "mechlaunch::session",
            "mechanical_session",
            %launch_id,
            mode
        );
        Self {
            span,
            started_at: Instant::now(),
            launch_id,
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "mechlaunch::session",
            launch_id = %self.launch_id,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Mechanical session finished"
        );
    }
}

/// Payload for logging a resolved launch plan as structured telemetry.
#[derive(Debug)]
pub struct LaunchPlanTelemetry<'a> {
    pub executable: &'a str,
    pub version: u32,
    pub mode: &'a str,
    pub args: &'a [String],
    pub env_overrides: usize,
    pub warnings: usize,
}

/// Emit the resolved plan to `tracing`.
pub fn emit_launch_plan(telemetry: &LaunchPlanTelemetry<'_>) {
    info!(
        target: "mechlaunch::plan",
        executable = telemetry.executable,
        version = telemetry.version,
        mode = telemetry.mode,
        args = ?telemetry.args,
        env_overrides = telemetry.env_overrides,
        warnings = telemetry.warnings,
        "Resolved launch plan"
    );
}
