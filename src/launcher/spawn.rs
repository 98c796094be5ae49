//! Run a launch plan as a child process.

use tokio::process::Command;
use uuid::Uuid;

use crate::lib::{errors::ProcessError, telemetry::LaunchSpan};

use super::plan::LaunchPlan;

/// Build the child-process command for a plan.
///
/// The child's environment is exactly the plan's map; nothing leaks in from
/// the launcher's own process environment.
pub fn build_command(plan: &LaunchPlan) -> Command {
    let mut command = Command::new(plan.executable());
    command.kill_on_drop(true);
    command.args(plan.arguments());
    command.env_clear();
    command.envs(&plan.env);
    command
}

/// Spawn the session and wait for it to finish.
///
/// Returns the child's exit code, or `None` when it was terminated by a
/// signal.
pub async fn run(plan: &LaunchPlan, mode: &'static str) -> Result<Option<i32>, ProcessError> {
    let span = LaunchSpan::start(Uuid::new_v4(), mode);

    let mut child = build_command(plan)
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            executable: plan.executable().to_string(),
            source,
        })?;

    let status = child.wait().await.map_err(|source| ProcessError::Wait {
        executable: plan.executable().to_string(),
        source,
    })?;

    let outcome = if status.success() { "succeeded" } else { "failed" };
    span.finish(outcome, status.code());
    Ok(status.code())
}
