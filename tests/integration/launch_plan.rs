//! Acceptance suite for launch-plan construction.

use mechlaunch::{
    config::VersionPolicy,
    launcher::{build_launch_plan, LaunchPlanError, LaunchWarning, DEBUG_STOP_ENV},
    lib::{errors::LaunchConfigError, paths},
};

use crate::common::{base_env, build, has_token, request, EXE};

fn assert_rejects(request: &mechlaunch::launcher::LaunchRequest, expected: LaunchConfigError) {
    let error = build_launch_plan(request, &VersionPolicy::default(), &base_env())
        .expect_err("request should be rejected");
    match error {
        LaunchPlanError::Config(actual) => assert_eq!(actual, expected),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn default_server_session() {
    let mut req = request(241);
    req.port = Some(11);

    let plan = build(&req);
    assert_eq!(plan.env, base_env());
    assert!(has_token(&plan, "-AppModeMech"));
    assert!(has_token(&plan, "-b"));
    assert!(has_token(&plan, "-DSApplet"));
    assert!(has_token(&plan, EXE));
}

#[test]
fn debug_requests_a_debugger_wait() {
    let mut req = request(241);
    req.port = Some(11);
    req.debug = true;

    let plan = build(&req);
    assert!(plan.env.contains_key(DEBUG_STOP_ENV));
}

#[test]
fn graphical_session_is_not_batch() {
    let mut req = request(241);
    req.graphical = true;

    let plan = build(&req);
    assert!(!has_token(&plan, "-b"));
}

#[test]
fn private_appdata_isolates_the_user_data_root() {
    let mut req = request(241);
    req.port = Some(11);
    req.private_appdata = true;

    let plan = build(&req);
    let var = paths::user_data_env_var();
    assert_ne!(plan.env.get(var), base_env().get(var));

    let redirected = plan.env.get(var).expect("user data root is set");
    std::fs::remove_dir_all(redirected).expect("caller owns the directory");
}

#[test]
fn conflicting_options_are_rejected() {
    // Can't mix project file and input script.
    let mut req = request(241);
    req.graphical = true;
    req.project_file = Some("foo.mechdb".into());
    req.input_script = Some("foo.py".into());
    assert_rejects(&req, LaunchConfigError::ProjectFileWithScript);

    // Project file only works in graphical mode.
    let mut req = request(241);
    req.project_file = Some("foo.mechdb".into());
    assert_rejects(&req, LaunchConfigError::ProjectFileRequiresGraphical);

    // Can't mix port and project file.
    let mut req = request(241);
    req.graphical = true;
    req.project_file = Some("foo.mechdb".into());
    req.port = Some(11);
    assert_rejects(&req, LaunchConfigError::PortWithProjectFile);

    // Can't mix port and input script.
    let mut req = request(241);
    req.input_script = Some("foo.py".into());
    req.port = Some(11);
    assert_rejects(&req, LaunchConfigError::PortWithScript);
}

#[test]
fn welcome_screen_keeps_the_launcher_ui() {
    let mut req = request(241);
    req.graphical = true;
    req.show_welcome_screen = true;

    let plan = build(&req);
    assert!(!has_token(&plan, "-AppModeMech"));
}

#[test]
fn legacy_releases_take_the_splash_flags() {
    let mut req = request(231);
    req.port = Some(11);
    let plan = build(&req);
    assert!(has_token(&plan, "-nosplash"));
    assert!(has_token(&plan, "-notabctrl"));

    let mut req = request(241);
    req.port = Some(11);
    let plan = build(&req);
    assert!(!has_token(&plan, "-nosplash"));
    assert!(!has_token(&plan, "-notabctrl"));
}

#[test]
fn server_port_is_forwarded() {
    let mut req = request(241);
    req.port = Some(11);

    let plan = build(&req);
    assert!(has_token(&plan, "-grpc"));
    assert!(has_token(&plan, "11"));
}

#[test]
fn project_file_is_forwarded() {
    let mut req = request(241);
    req.graphical = true;
    req.project_file = Some("foo.mechdb".into());

    let plan = build(&req);
    assert!(has_token(&plan, "-file"));
    assert!(has_token(&plan, "foo.mechdb"));
}

#[test]
fn input_script_is_forwarded() {
    let mut req = request(241);
    req.graphical = true;
    req.input_script = Some("foo.py".into());

    let plan = build(&req);
    assert!(has_token(&plan, "-script"));
    assert!(has_token(&plan, "foo.py"));
}

#[test]
fn script_args_are_wrapped_in_double_quotes() {
    let mut req = request(241);
    req.graphical = true;
    req.input_script = Some("foo.py".into());
    req.script_args = Some("arg1,arg2,arg3".into());

    let plan = build(&req);
    assert!(has_token(&plan, "-ScriptArgs"));
    assert!(has_token(&plan, "\"arg1,arg2,arg3\""));
    assert!(has_token(&plan, "-script"));
    assert!(has_token(&plan, "foo.py"));
}

#[test]
fn script_args_require_an_input_script() {
    let mut req = request(241);
    req.graphical = true;
    req.script_args = Some("arg1,arg2,arg3".into());
    assert_rejects(&req, LaunchConfigError::ScriptArgsWithoutScript);
}

#[test]
fn script_args_accept_single_quotes() {
    let mut req = request(241);
    req.graphical = true;
    req.input_script = Some("foo.py".into());
    req.script_args = Some("arg1,arg2,'arg3'".into());

    let plan = build(&req);
    assert!(has_token(&plan, "\"arg1,arg2,'arg3'\""));
}

#[test]
fn script_args_reject_double_quotes() {
    let mut req = request(241);
    req.graphical = true;
    req.input_script = Some("foo.py".into());
    req.script_args = Some("arg1,\"arg2\",arg3".into());
    assert_rejects(
        &req,
        LaunchConfigError::ScriptArgsDoubleQuote {
            args: "arg1,\"arg2\",arg3".into(),
        },
    );
}

#[test]
fn feature_flags_split_known_from_unknown() {
    let mut req = request(241);
    req.port = Some(11);
    req.features = Some("a;b;c".into());

    let plan = build(&req);
    assert!(has_token(&plan, "-featureflags"));
    assert!(has_token(&plan, "a;b;c"));
    assert!(matches!(
        plan.warnings.as_slice(),
        [LaunchWarning::UnknownFeatureFlags { .. }]
    ));

    let mut req = request(241);
    req.port = Some(11);
    req.features = Some("MultistageHarmonic".into());

    let plan = build(&req);
    assert!(has_token(&plan, "Mechanical.MultistageHarmonic"));
    assert!(plan.warnings.is_empty());
}

#[test]
fn exit_rules_follow_the_mode_and_script() {
    // Regardless of release, exit does nothing on its own.
    let mut req = request(232);
    req.port = Some(11);
    req.exit = Some(true);
    let plan = build(&req);
    assert!(!has_token(&plan, "-x"));
    // Releases before 2024 R1 warn about the no-op.
    assert!(matches!(
        plan.warnings.as_slice(),
        [LaunchWarning::ExitHasNoEffect { version: 232 }]
    ));

    let mut req = request(241);
    req.port = Some(11);
    req.exit = Some(true);
    let plan = build(&req);
    assert!(!has_token(&plan, "-x"));
    assert!(plan.warnings.is_empty());

    // In UI mode the session stays open.
    let mut req = request(241);
    req.graphical = true;
    req.input_script = Some("foo.py".into());
    req.exit = Some(true);
    assert!(!has_token(&build(&req), "-x"));

    // In batch mode exit is implied...
    let mut req = request(241);
    req.input_script = Some("foo.py".into());
    assert!(has_token(&build(&req), "-x"));

    // ...can be passed explicitly...
    let mut req = request(241);
    req.input_script = Some("foo.py".into());
    req.exit = Some(true);
    assert!(has_token(&build(&req), "-x"));

    // ...and can not be disabled.
    let mut req = request(241);
    req.input_script = Some("foo.py".into());
    req.exit = Some(false);
    assert!(has_token(&build(&req), "-x"));
}

#[test]
fn batch_mode_requires_something_to_run() {
    assert_rejects(&request(241), LaunchConfigError::BatchMissingWork);

    let mut req = request(241);
    req.graphical = true;
    build(&req);

    let mut req = request(241);
    req.input_script = Some("input.py".into());
    build(&req);

    let mut req = request(241);
    req.port = Some(11);
    build(&req);
}

#[test]
fn rebuilding_is_deterministic() {
    let mut req = request(241);
    req.port = Some(11);
    req.debug = true;
    req.features = Some("MultistageHarmonic;Unknown".into());

    let first = build(&req);
    let second = build(&req);
    assert_eq!(first, second);
}
