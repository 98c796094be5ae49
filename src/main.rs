//! Entry point for mechlaunch.
use std::{collections::BTreeMap, env, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use mechlaunch::{
    cli::{execute_cli_command, load_config, resolve_profile, LaunchArgs, ParsedCommand},
    config::LauncherConfig,
    launcher::{build_launch_plan, plan::LaunchPlan, spawn},
    lib::telemetry::{self, emit_launch_plan, LaunchPlanTelemetry},
};
use serde_json::json;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(err) => {
            error!(target: "mechlaunch::cli", reason = %err, "mechlaunch failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn bootstrap() -> Result<ExitCode> {
    telemetry::init_tracing()?;
    let args = LaunchArgs::parse();
    let config = load_config(args.config_override.clone())?;

    match args.into_command() {
        ParsedCommand::Launch(launch_args) => run_launch(launch_args, &config).await,
        ParsedCommand::Cli(command) => {
            let payload = execute_cli_command(command, &config)?;
            println!("{payload}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_launch(args: LaunchArgs, config: &LauncherConfig) -> Result<ExitCode> {
    let profile = resolve_profile(args)?;
    let base_env: BTreeMap<String, String> = env::vars().collect();

    let plan = build_launch_plan(&profile.request, &config.versions, &base_env)?;
    for warning in &plan.warnings {
        warn!(target: "mechlaunch::plan", "{warning}");
    }
    emit_launch_plan(&LaunchPlanTelemetry {
        executable: plan.executable(),
        version: profile.request.version,
        mode: profile.request.mode().as_str(),
        args: &plan.args,
        env_overrides: env_overrides(&plan, &base_env).len(),
        warnings: plan.warnings.len(),
    });

    if profile.dry_run {
        let payload = json!({
            "executable": plan.executable(),
            "args": plan.arguments(),
            "env_overrides": env_overrides(&plan, &base_env),
            "warnings": plan.warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(ExitCode::SUCCESS);
    }

    let exit_code = spawn::run(&plan, profile.request.mode().as_str()).await?;
    Ok(match exit_code {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    })
}

/// Keys the plan added or changed relative to the ambient environment.
fn env_overrides(plan: &LaunchPlan, base_env: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    plan.env
        .iter()
        .filter(|(key, value)| base_env.get(*key) != Some(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
