// Input resolver tests: address validation, prompt retry, all-or-nothing timing fallback

use voltbench::config::{BenchConfig, RunConfig};
use voltbench::error::InputError;
use voltbench::input::{InputOverrides, parse_timing, prompt_address, resolve_run, validate_ip_address};

fn resolve(stdin: &str, overrides: &InputOverrides) -> (Result<RunConfig, InputError>, String) {
    let mut input = stdin.as_bytes();
    let mut out = Vec::new();
    let result = resolve_run(&mut input, &mut out, overrides, &BenchConfig::default());
    (result, String::from_utf8(out).unwrap())
}

fn default_run() -> RunConfig {
    RunConfig {
        address: "192.168.2.117".into(),
        duration_secs: 60,
        interval_secs: 3,
    }
}

#[test]
fn validate_accepts_dotted_quads() {
    for ip in [
        "10.0.0.1",
        "0.0.0.0",
        "255.255.255.255",
        "192.168.2.117",
        "010.001.0.1",
    ] {
        assert!(validate_ip_address(ip), "{ip} should be accepted");
    }
}

#[test]
fn validate_rejects_out_of_range_octets() {
    for ip in ["999.1.1.1", "256.0.0.1", "1.2.3.260", "1.2.3.1000"] {
        assert!(!validate_ip_address(ip), "{ip} should be rejected");
    }
}

#[test]
fn validate_rejects_wrong_octet_count_and_junk() {
    for ip in [
        "", "1.2.3", "1.2.3.4.5", "1..2.3", "1.2.3.", ".1.2.3", "a.b.c.d", "1.2.3.-4", "+1.2.3.4",
        " 1.2.3.4", "1.2.3.4/24", "bitaxe.local",
    ] {
        assert!(!validate_ip_address(ip), "{ip:?} should be rejected");
    }
}

#[test]
fn prompt_address_reprompts_until_valid() {
    let mut input = "999.1.1.1\nnope\n10.0.0.1\n".as_bytes();
    let mut out = Vec::new();
    let address = prompt_address(&mut input, &mut out).unwrap();
    assert_eq!(address, "10.0.0.1");
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Invalid IP address format").count(), 2);
    assert_eq!(out.matches("Enter the IP address").count(), 3);
}

#[test]
fn prompt_address_fails_at_end_of_input() {
    let mut input = "999.1.1.1\n".as_bytes();
    let mut out = Vec::new();
    let err = prompt_address(&mut input, &mut out).unwrap_err();
    assert!(matches!(err, InputError::EndOfInput(_)));
}

#[test]
fn parse_timing_converts_minutes_to_seconds() {
    assert_eq!(parse_timing("5", "3").unwrap(), (300, 3));
    assert_eq!(parse_timing(" 1 ", "60").unwrap(), (60, 60));
}

#[test]
fn parse_timing_rejects_non_positive_and_non_numeric() {
    assert!(matches!(parse_timing("0", "3"), Err(InputError::NotPositive)));
    assert!(matches!(parse_timing("5", "-1"), Err(InputError::NotPositive)));
    assert!(matches!(
        parse_timing("five", "3"),
        Err(InputError::NotANumber { field: "duration", .. })
    ));
    assert!(matches!(
        parse_timing("5", "2.5"),
        Err(InputError::NotANumber { field: "interval", .. })
    ));
}

#[test]
fn resolve_run_returns_valid_input_unchanged() {
    let (run, _) = resolve("10.0.0.1\n5\n3\n", &InputOverrides::default());
    assert_eq!(
        run.unwrap(),
        RunConfig {
            address: "10.0.0.1".into(),
            duration_secs: 300,
            interval_secs: 3,
        }
    );
}

#[test]
fn resolve_run_non_positive_falls_back_to_whole_default() {
    let (run, out) = resolve("10.0.0.1\n5\n0\n", &InputOverrides::default());
    // The entered address is discarded along with the timing.
    assert_eq!(run.unwrap(), default_run());
    assert!(out.contains("Invalid input: Duration and interval must be positive integers."));
    assert!(out.contains("Using default values (1 minute, 3 seconds)."));
}

#[test]
fn resolve_run_non_numeric_duration_skips_interval_prompt() {
    let (run, out) = resolve("10.0.0.1\nabc\n", &InputOverrides::default());
    assert_eq!(run.unwrap(), default_run());
    assert!(!out.contains("interval between data samples"));
}

#[test]
fn resolve_run_end_of_input_on_timing_uses_defaults() {
    let (run, _) = resolve("10.0.0.1\n", &InputOverrides::default());
    assert_eq!(run.unwrap(), default_run());
}

#[test]
fn resolve_run_uses_overrides_without_prompting() {
    let overrides = InputOverrides {
        address: Some("10.1.2.3".into()),
        duration_minutes: Some("2".into()),
        interval_secs: Some("10".into()),
    };
    let (run, out) = resolve("", &overrides);
    assert_eq!(
        run.unwrap(),
        RunConfig {
            address: "10.1.2.3".into(),
            duration_secs: 120,
            interval_secs: 10,
        }
    );
    assert!(out.is_empty());
}

#[test]
fn resolve_run_rejects_invalid_address_override() {
    let overrides = InputOverrides {
        address: Some("300.1.1.1".into()),
        ..Default::default()
    };
    let (run, _) = resolve("10.0.0.1\n5\n3\n", &overrides);
    assert!(matches!(run, Err(InputError::InvalidAddress(_))));
}

#[test]
fn resolve_run_fallback_uses_configured_defaults() {
    let config = BenchConfig::load_from_str(
        r#"
[device]
fallback_address = "10.9.9.9"

[run]
default_duration_minutes = 3
default_interval_secs = 6
"#,
    )
    .unwrap();
    let mut input = "10.0.0.1\n-2\n5\n".as_bytes();
    let mut out = Vec::new();
    let run = resolve_run(&mut input, &mut out, &InputOverrides::default(), &config).unwrap();
    assert_eq!(
        run,
        RunConfig {
            address: "10.9.9.9".into(),
            duration_secs: 180,
            interval_secs: 6,
        }
    );
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Using default values (3 minutes, 6 seconds)."));
}

#[test]
fn resolve_run_duration_beyond_clock_range_falls_back_to_default() {
    // 153722867280912930 minutes fits i64 seconds but not a clock deadline.
    let (run, out) = resolve("10.0.0.1\n153722867280912930\n3\n", &InputOverrides::default());
    assert_eq!(run.unwrap(), default_run());
    assert!(out.contains("duration of 153722867280912930 minutes is too long"));
    assert!(!out.contains("interval between data samples"));
}
