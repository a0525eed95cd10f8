use std::fs;

use crate::common::{
    SAMPLE_SCHEDULE, make_temp_dir, read_log_contents, run, stderr_of, stdout_of, write_config,
    write_schedule,
};

const CONFIG: &str = r#"{
  "hour_window": { "value": "08:00-18:00", "description": "Hours shown as grid rows." },
  "file_logging_enabled": { "value": "True", "description": "file logging" },
  "report_dropped_blocks": { "value": "False", "description": "drops" },
  "color_output": { "value": "False", "description": "colors" }
}"#;

#[test]
fn config_file_sets_window_and_colors() {
    let dir = make_temp_dir("schedgrid-config");
    write_schedule(&dir, SAMPLE_SCHEDULE);
    write_config(&dir, CONFIG);

    let output = run(&dir, &["horario.json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("08:00-09:00"));
    assert!(stdout.contains("17:00-18:00"));
    assert!(!stdout.contains("07:00-08:00"));
    assert!(!stdout.contains("18:00-19:00"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn config_flag_points_at_another_file() {
    let dir = make_temp_dir("schedgrid-config-flag");
    write_schedule(&dir, SAMPLE_SCHEDULE);
    fs::write(dir.join("alt.json"), CONFIG).unwrap();

    let output = run(&dir, &["horario.json", "--config", "alt.json", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["window"], "08:00-18:00");
}

#[test]
fn show_config_prints_table() {
    let dir = make_temp_dir("schedgrid-config-show");
    write_schedule(&dir, "[]");

    let output = run(&dir, &["horario.json", "--show-config", "--set", "HOUR_WINDOW=9-17"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("CONFIG"));
    assert!(stdout.contains("HOUR_WINDOW"));
    assert!(stdout.contains("09:00-17:00"));
    assert!(!dir.join("config.json").exists());
}

#[test]
fn save_config_persists_overrides() {
    let dir = make_temp_dir("schedgrid-config-save");
    write_schedule(&dir, "[]");

    let output = run(
        &dir,
        &["horario.json", "--set", "HOUR_WINDOW=8-20", "--set", "COLOR_OUTPUT=False", "--save-config"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Saved config to config.json"));

    let saved = fs::read_to_string(dir.join("config.json")).unwrap();
    assert!(saved.contains("08:00-20:00"));

    let again = run(&dir, &["horario.json", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&again.stdout).unwrap();
    assert_eq!(value["window"], "08:00-20:00");
}

#[test]
fn bad_override_fails() {
    let dir = make_temp_dir("schedgrid-config-bad-set");
    write_schedule(&dir, "[]");
    let output = run(&dir, &["horario.json", "--set", "HOUR_WINDOW=20-8"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("must be earlier than end hour"));
}

#[test]
fn malformed_config_fails() {
    let dir = make_temp_dir("schedgrid-config-malformed");
    write_schedule(&dir, "[]");
    write_config(&dir, "{ not json");
    let output = run(&dir, &["horario.json"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Invalid JSON in 'config.json'"));
}

#[test]
fn file_logging_follows_config() {
    let dir = make_temp_dir("schedgrid-config-logs");
    write_schedule(&dir, SAMPLE_SCHEDULE);

    let output = run(&dir, &["horario.json"]);
    assert!(output.status.success());
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Loaded 4 schedule record(s)"));
    assert!(log.contains("Built weekly grid 07:00-21:00 with 4 block(s), 3 placed"));

    let quiet_dir = make_temp_dir("schedgrid-config-nologs");
    write_schedule(&quiet_dir, SAMPLE_SCHEDULE);
    let output = run(&quiet_dir, &["horario.json", "--set", "FILE_LOGGING_ENABLED=False"]);
    assert!(output.status.success());
    assert!(!quiet_dir.join("logs").exists());
}

#[test]
fn logs_flag_moves_log_directory() {
    let dir = make_temp_dir("schedgrid-config-logdir");
    write_schedule(&dir, "[]");
    let output = run(&dir, &["horario.json", "--logs", "elsewhere"]);
    assert!(output.status.success());
    assert!(dir.join("elsewhere").is_dir());
    assert!(!dir.join("logs").exists());
}
