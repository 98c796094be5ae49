use std::collections::BTreeMap;

use mechlaunch::{
    config::VersionPolicy,
    launcher::{build_launch_plan, LaunchPlan, LaunchRequest},
};

pub const EXE: &str = "AnsysWBU.exe";

/// A stand-in process environment so tests never depend on the harness env.
pub fn base_env() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("PATH".to_string(), "/usr/bin:/bin".to_string()),
        ("HOME".to_string(), "/home/analyst".to_string()),
        ("TEMP".to_string(), "C:\\Users\\analyst\\Temp".to_string()),
        ("DISPLAY".to_string(), ":0".to_string()),
    ])
}

pub fn request(version: u32) -> LaunchRequest {
    LaunchRequest::new(EXE, version)
}

/// Build with default thresholds, panicking on invalid requests.
pub fn build(request: &LaunchRequest) -> LaunchPlan {
    build_launch_plan(request, &VersionPolicy::default(), &base_env())
        .expect("request should build")
}

pub fn has_token(plan: &LaunchPlan, token: &str) -> bool {
    plan.args.iter().any(|arg| arg == token)
}
