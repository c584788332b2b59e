//! Exit codes of the listing-relay binary

use std::process::{Command, Output};

const ENDPOINT: &str =
    "https://cloud-function-location-project-name.cloudfunctions.net/function-name";

fn run_relay(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_listing-relay"))
        .args(args)
        .output()
        .expect("Failed to run listing-relay")
}

#[test]
fn test_no_arguments_exits_with_usage() {
    let output = run_relay(&[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--location"));
}

#[test]
fn test_missing_endpoint_exits_with_usage() {
    let output = run_relay(&[
        "--location=vancouver",
        "--window_datetime_start=2020-01-01 00:00",
        "--window_length_hours=1",
    ]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_location_exits_nonzero() {
    let endpoint = format!("--cloud_function_endpoint={}", ENDPOINT);
    let output = run_relay(&[
        "--location=comox.valley",
        "--window_datetime_start=2020-01-01 00:00",
        "--window_length_hours=1",
        endpoint.as_str(),
    ]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
}

#[test]
fn test_window_start_with_seconds_exits_nonzero() {
    let endpoint = format!("--cloud_function_endpoint={}", ENDPOINT);
    let output = run_relay(&[
        "--location=vancouver",
        "--window_datetime_start=2020-01-01 00:00:00",
        "--window_length_hours=1",
        endpoint.as_str(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Correct format is: YYYY-MM-DD HH:MM"));
}

#[test]
fn test_invalid_endpoint_exits_nonzero() {
    let output = run_relay(&[
        "--location=vancouver",
        "--window_datetime_start=2020-01-01 00:00",
        "--window_length_hours=1",
        "--cloud_function_endpoint=not a url",
    ]);

    assert!(!output.status.success());
}
