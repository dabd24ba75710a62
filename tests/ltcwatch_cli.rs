use std::process::{Command, Output};

fn combined_output(output: &Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn ltcwatch_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_ltcwatch").expect("ltcwatch test binary not built")
}

fn run(args: &[&str], test_devices: &str) -> Output {
    Command::new(ltcwatch_bin())
        .args(args)
        .env("LTCWATCH_TEST_DEVICES", test_devices)
        .output()
        .expect("run ltcwatch")
}

#[test]
fn help_exits_zero_and_mentions_ltc() {
    let output = run(&["--help"], "");
    assert!(output.status.success());
    assert!(combined_output(&output).contains("LTC"));
}

#[test]
fn unknown_flag_exits_one_with_usage() {
    let output = run(&["--bogus"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn list_with_no_devices_exits_zero() {
    let output = run(&["--list"], "");
    assert!(output.status.success());
    assert!(combined_output(&output).contains("No audio input devices"));
}

#[test]
fn list_prints_indexed_devices() {
    let output = run(&["--list"], "Scarlett 2i2,Built-in Microphone");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Device 0: Scarlett 2i2"));
    assert!(combined.contains("Device 1: Built-in Microphone"));
}

#[test]
fn missing_device_exits_one_with_hint() {
    let output = run(&[], "Scarlett 2i2");
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("--list"));
}

#[test]
fn absent_device_index_exits_one_before_streaming() {
    let output = run(&["--device", "3"], "Scarlett 2i2");
    assert_eq!(output.status.code(), Some(1));
    let combined = combined_output(&output);
    assert!(combined.contains("Invalid device index: 3"));
    assert!(!combined.contains("Listening"));
}

#[test]
fn invalid_sample_rate_exits_one() {
    let output = run(&["--device", "0", "--sample-rate", "123"], "Scarlett 2i2");
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("--sample-rate"));
}
