use schedgrid::app::{self, OutputWidth};
use schedgrid::core::cli::CliArgs;
use schedgrid::{CellRenderInstruction, GridBuilder, RawScheduleBlock, build_grid};

use crate::common::{SAMPLE_SCHEDULE, make_temp_dir, write_schedule};

#[test]
fn build_grid_from_parsed_document() {
    let raw = RawScheduleBlock::from_json_array(SAMPLE_SCHEDULE).unwrap();
    let grid = build_grid(&raw);

    assert_eq!(grid.blocks().len(), 4);
    assert_eq!(grid.placed_blocks().count(), 3);
    assert!(matches!(
        grid.cell(0, 8),
        CellRenderInstruction::BlockStart { row_span: 2, .. }
    ));
    assert_eq!(grid.cell(0, 9), CellRenderInstruction::Suppressed);
    assert!(matches!(
        grid.cell(2, 14),
        CellRenderInstruction::BlockStart { block, row_span: 1 } if block.label == "Cálculo I"
    ));
    assert_eq!(
        grid.cell_content(0, 8).unwrap().color,
        grid.cell_content(2, 14).unwrap().color
    );
}

#[test]
fn builder_default_matches_build_grid() {
    let raw = RawScheduleBlock::from_json_array(SAMPLE_SCHEDULE).unwrap();
    assert_eq!(GridBuilder::default().build(&raw), build_grid(&raw));
}

#[test]
fn run_writes_into_any_writer() {
    let dir = make_temp_dir("schedgrid-lib-run");
    let schedule = write_schedule(&dir, SAMPLE_SCHEDULE);
    let args = CliArgs::from_args(
        [
            schedule.to_string_lossy().to_string(),
            "--config".into(),
            dir.join("config.json").to_string_lossy().to_string(),
            "--logs".into(),
            dir.join("logs").to_string_lossy().to_string(),
            "--set".into(),
            "COLOR_OUTPUT=False".into(),
        ]
        .into_iter(),
    )
    .unwrap();

    let mut out = Vec::new();
    app::run(&args, OutputWidth::Unbounded, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Bases de Datos (2h)"));
    assert!(text.contains("LEGEND"));
}
