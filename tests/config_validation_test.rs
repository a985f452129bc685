use std::fs;

use tempfile::TempDir;
use workload_demo::api::AppState;
use workload_demo::config::{AppConfig, LogFormat, WorkloadConfig};
use workload_demo::Error;

#[test]
fn defaults_match_reference_behavior() {
    let config = AppConfig::default();

    assert_eq!(config.workload.io_delay_secs, 2);
    assert_eq!(config.workload.cpu_iterations, 10_000);
    assert_eq!(config.workload.max_random_sleep_secs, 5);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.bind_addr(), "0.0.0.0:8000");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::from_sources(Some(&temp_dir.path().join("absent.toml"))).unwrap();

    assert_eq!(config.workload, WorkloadConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn file_values_override_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9090

[logging]
level = "debug"
format = "text"

[workload]
cpu_iterations = 5000000
"#,
    )
    .unwrap();

    let config = AppConfig::from_sources(Some(&path)).unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.workload.cpu_iterations, 5_000_000);
    // Untouched keys keep their defaults
    assert_eq!(config.workload.io_delay_secs, 2);
}

#[test]
fn zero_cpu_iterations_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[workload]\ncpu_iterations = 0\n").unwrap();

    let result = AppConfig::from_sources(Some(&path));
    assert!(
        matches!(result, Err(Error::InvalidConfig(_))),
        "Expected zero iterations to fail validation"
    );

    let workload = WorkloadConfig {
        cpu_iterations: 0,
        ..Default::default()
    };
    assert!(AppState::from_config(workload).is_err());
}

#[test]
fn io_delay_below_two_seconds_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[workload]\nio_delay_secs = 0\n").unwrap();

    let result = AppConfig::from_sources(Some(&path));
    assert!(
        matches!(result, Err(Error::InvalidConfig(_))),
        "Expected a zero I/O delay to fail validation"
    );

    for io_delay_secs in [0, 1] {
        let workload = WorkloadConfig {
            io_delay_secs,
            ..Default::default()
        };
        assert!(workload.validate().is_err(), "io_delay_secs = {}", io_delay_secs);
    }

    let longer = WorkloadConfig {
        io_delay_secs: 10,
        ..Default::default()
    };
    assert!(longer.validate().is_ok());
}

#[test]
fn random_sleep_above_five_seconds_is_rejected() {
    let too_long = WorkloadConfig {
        max_random_sleep_secs: 6,
        ..Default::default()
    };
    assert!(matches!(too_long.validate(), Err(Error::InvalidConfig(_))));

    let shorter = WorkloadConfig {
        max_random_sleep_secs: 0,
        ..Default::default()
    };
    assert!(shorter.validate().is_ok());
}
