
use crate::core::models::RawScheduleBlock;
use crate::grid::{WeeklyGrid, build_grid};
use serde_json::json;

/// One two-hour Wednesday block, as in the usual sample schedule.
pub(super) fn databases_grid() -> WeeklyGrid {
    build_grid(&[RawScheduleBlock::from_value(json!({
        "day": "Miércoles",
        "hora_inicio": "10:00",
        "hora_fin": "12:00",
        "asignatura": "Bases de Datos",
        "aula": "B-204"
    }))])
}
