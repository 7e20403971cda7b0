//! Binary-level tests for the swift-sdk-bundler CLI.

use assert_cmd::Command;
use predicates::prelude::*;

fn bundler() -> Command {
    Command::cargo_bin("swift-sdk-bundler").expect("binary built")
}

#[test]
fn help_lists_the_invocation_surface() {
    bundler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bundle-version"))
        .stdout(predicate::str::contains("--swift-version"))
        .stdout(predicate::str::contains("--target-arch"))
        .stdout(predicate::str::contains("--with-docker"))
        .stdout(predicate::str::contains("--linux-distribution-name"));
}

#[test]
fn generates_a_bundle_and_reports_elapsed_time() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Elapsed time:"));

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with(".artifactbundle"));
    assert!(entries[0].contains("ubuntu_22.04"));
}

#[test]
fn explicit_sdk_name_names_the_bundle() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--sdk-name")
        .arg("my-sdk")
        .assert()
        .success();

    assert!(dir.path().join("my-sdk.artifactbundle").is_dir());
}

#[test]
fn unsupported_distribution_version_fails_with_named_combination() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--linux-distribution-version")
        .arg("18.04")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("18.04"))
        .stderr(predicate::str::contains("ubuntu"))
        // The elapsed line still prints after the error is reported.
        .stdout(predicate::str::contains("Elapsed time:"));
}

#[test]
fn container_image_without_docker_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--from-container-image")
        .arg("ubuntu:24.04")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--with-docker"));
}

#[test]
fn validation_error_still_prints_elapsed_time() {
    bundler()
        .arg("--sdk-name")
        .arg("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be empty"))
        .stdout(predicate::str::contains("Elapsed time:"));
}

#[test]
fn verbose_flag_enables_progress_logging() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .env_remove("RUST_LOG")
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("artifact identifier"));
}

#[test]
fn progress_logging_is_quiet_by_default() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .env_remove("RUST_LOG")
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("artifact identifier").not());
}

#[test]
fn unknown_arch_value_is_rejected_by_the_parser() {
    bundler()
        .arg("--target-arch")
        .arg("riscv64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn incremental_rerun_reports_up_to_date() {
    let dir = tempfile::tempdir().unwrap();

    bundler()
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--incremental")
        .assert()
        .success();

    bundler()
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--incremental")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}
