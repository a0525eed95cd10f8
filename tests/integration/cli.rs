use serde_json::Value;

use crate::common::{
    SAMPLE_SCHEDULE, make_temp_dir, read_log_contents, run, stderr_of, stdout_of, write_schedule,
};

const NO_COLOR: [&str; 2] = ["--set", "COLOR_OUTPUT=False"];

#[test]
fn renders_grid_and_legend() {
    let dir = make_temp_dir("schedgrid-cli");
    write_schedule(&dir, SAMPLE_SCHEDULE);

    let output = run(&dir, &["horario.json", NO_COLOR[0], NO_COLOR[1]]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);

    assert!(stdout.contains("WEEKLY SCHEDULE"));
    assert!(stdout.contains("HOUR        | LUNES"));
    assert!(stdout.contains("07:00-08:00"));
    assert!(stdout.contains("20:00-21:00"));
    assert!(!stdout.contains("21:00-22:00"));
    assert!(stdout.contains("Cálculo I (2h)"));
    assert!(stdout.contains("Bases de Datos (2h)"));
    assert!(stdout.contains("LEGEND"));
    assert!(!stdout.contains("Química"));
    assert!(!stdout.contains('\u{1b}'));
    assert_eq!(stdout.matches("Cálculo I").count(), 3);
}

#[test]
fn colors_are_on_by_default() {
    let dir = make_temp_dir("schedgrid-cli-color");
    write_schedule(&dir, SAMPLE_SCHEDULE);

    let output = run(&dir, &["horario.json"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains('\u{1b}'));
}

#[test]
fn empty_schedule_prints_placeholder() {
    let dir = make_temp_dir("schedgrid-cli-empty");
    write_schedule(&dir, "[]");

    let output = run(&dir, &["horario.json"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("No schedule available."));
    assert!(!stdout.contains("LEGEND"));
}

#[test]
fn json_output_is_a_grid_snapshot() {
    let dir = make_temp_dir("schedgrid-cli-json");
    write_schedule(&dir, SAMPLE_SCHEDULE);

    let output = run(&dir, &["horario.json", "--json", "--select", "1"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(value["window"], "07:00-21:00");
    assert_eq!(value["empty"], false);
    assert_eq!(value["dropped"], serde_json::json!([2]));

    let columns = value["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 6);
    assert!(columns.iter().all(|c| c["cells"].as_array().unwrap().len() == 14));

    let miercoles = &columns[2];
    assert_eq!(miercoles["day"], "Miércoles");
    assert_eq!(miercoles["cells"][2]["kind"], "empty");
    assert_eq!(miercoles["cells"][3]["kind"], "block_start");
    assert_eq!(miercoles["cells"][3]["row_span"], 2);
    assert_eq!(miercoles["cells"][3]["block"]["label"], "Bases de Datos");
    assert_eq!(miercoles["cells"][4]["kind"], "suppressed");
    assert_eq!(miercoles["cells"][5]["kind"], "empty");

    let legend: Vec<_> = value["legend"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(legend, ["Cálculo I", "Bases de Datos"]);
}

#[test]
fn select_shows_block_details() {
    let dir = make_temp_dir("schedgrid-cli-select");
    write_schedule(&dir, SAMPLE_SCHEDULE);

    let output = run(&dir, &["horario.json", "--select", "0", NO_COLOR[0], NO_COLOR[1]]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("SELECTED BLOCK"));
    assert!(stdout.contains("*Cálculo I (2h)"));
    assert!(stdout.contains("Dr. Pérez"));
    assert!(stdout.contains("08:00-10:00"));

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Selected Block(position=0, label='Cálculo I'"));
}

#[test]
fn select_rejects_unknown_and_dropped_positions() {
    let dir = make_temp_dir("schedgrid-cli-select-bad");
    write_schedule(&dir, SAMPLE_SCHEDULE);

    let output = run(&dir, &["horario.json", "--select", "9"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("No schedule block at position 9."));

    let output = run(&dir, &["horario.json", "--select", "2"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("has no recognized day"));
}

#[test]
fn dropped_blocks_are_silent_unless_reported() {
    let dir = make_temp_dir("schedgrid-cli-drops");
    write_schedule(&dir, SAMPLE_SCHEDULE);

    let quiet = run(&dir, &["horario.json"]);
    assert!(quiet.status.success());
    assert!(!stderr_of(&quiet).contains("skipped"));

    let loud = run(&dir, &["horario.json", "--set", "REPORT_DROPPED_BLOCKS=True"]);
    assert!(loud.status.success());
    assert!(stderr_of(&loud).contains("Schedule block #2 ('Química') skipped: unrecognized day 'Domingo'"));
}

#[test]
fn missing_argument_prints_usage() {
    let dir = make_temp_dir("schedgrid-cli-usage");
    let output = run(&dir, &[]);
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Missing schedule file argument"));
    assert!(stderr.contains("Usage: schedgrid"));
}

#[test]
fn unknown_flag_is_rejected() {
    let dir = make_temp_dir("schedgrid-cli-flag");
    let output = run(&dir, &["horario.json", "--verbose"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Unknown argument: --verbose"));
}

#[test]
fn unreadable_schedule_fails() {
    let dir = make_temp_dir("schedgrid-cli-missing");
    let output = run(&dir, &["nope.json"]);
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("could not render schedule 'nope.json'"));
    assert!(stderr.contains("Failed to read schedule 'nope.json'"));
}

#[test]
fn non_array_schedule_fails() {
    let dir = make_temp_dir("schedgrid-cli-object");
    write_schedule(&dir, r#"{ "day": "Lunes" }"#);
    let output = run(&dir, &["horario.json"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Expected a JSON array of schedule blocks, found an object."));
}

#[test]
fn malformed_records_still_render() {
    let dir = make_temp_dir("schedgrid-cli-malformed");
    write_schedule(
        &dir,
        r#"[ 1, null, { "day": "Viernes", "startTime": "16:00", "endTime": "15:00" } ]"#,
    );
    let output = run(&dir, &["horario.json", NO_COLOR[0], NO_COLOR[1]]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Clase"));
    assert!(!stdout.contains("Clase ("));
}
