//! `appconfig-synth list` and top-level flags

mod common;

use common::*;

#[test]
fn list_shows_resources_outputs_and_content() {
    let env = TestEnv::with_flags();

    let result = env.run(&["list"]);

    assert!(result.is_success(), "{}", result.combined_output());
    for id in LOGICAL_IDS {
        assert!(result.stdout.contains(id), "missing {id}:\n{}", result.stdout);
    }
    assert!(result.stdout.contains("AWS::AppConfig::DeploymentStrategy"));
    assert!(result.stdout.contains("Outputs (3):"));
    assert!(result.stdout.contains("unattached"));
    assert_not_exists!(env, "synth.out");
}

#[test]
fn list_missing_content_fails() {
    let env = TestEnv::empty();

    let result = env.run(&["list"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("hint:"));
}

#[test]
fn version_flag_prints_version() {
    let env = TestEnv::empty();

    let result = env.run(&["--version"]);

    assert!(result.is_success());
    assert!(result.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_commands() {
    let env = TestEnv::empty();

    let result = env.run(&["--help"]);

    for command in ["synth", "diff", "list", "check"] {
        assert!(result.stdout.contains(command));
    }
}
