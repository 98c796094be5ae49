//! Smoke tests driving the compiled binary.

use std::process::Command;

use serde_json::Value;

const BINARY_PATH: &str = env!("CARGO_BIN_EXE_mechlaunch");

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(BINARY_PATH)
        .args(args)
        .env_remove("MECHLAUNCH_CONFIG_PATH")
        .output()
        .expect("binary should run")
}

#[test]
fn dry_run_prints_the_plan_as_json() {
    let output = run_binary(&[
        "--exe",
        "AnsysWBU.exe",
        "-r",
        "231",
        "--port",
        "11",
        "--dry-run",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(payload["executable"], "AnsysWBU.exe");

    let args: Vec<&str> = payload["args"]
        .as_array()
        .expect("args array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(args.contains(&"-b"));
    assert!(args.contains(&"-grpc"));
    assert!(args.contains(&"11"));
    // Release 231 still takes the legacy splash flags.
    assert!(args.contains(&"-nosplash"));
    assert!(args.contains(&"-notabctrl"));
}

#[test]
fn conflicting_options_fail_with_a_named_message() {
    let output = run_binary(&[
        "--exe",
        "AnsysWBU.exe",
        "-r",
        "241",
        "--port",
        "11",
        "--input-script",
        "foo.py",
        "--dry-run",
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--port") && stderr.contains("--input-script"),
        "stderr should name both options: {stderr}"
    );
}

#[test]
fn batch_mode_without_work_fails() {
    let output = run_binary(&["--exe", "AnsysWBU.exe", "-r", "241", "--dry-run"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Batch mode requires"),
        "stderr: {stderr}"
    );
}
