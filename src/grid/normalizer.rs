use crate::core::aliases::{self, DEFAULT_LABEL};
use crate::core::models::{NormalizedScheduleBlock, RawScheduleBlock};
use crate::core::types::{SchoolDay, hour_of};
use crate::grid::palette::color_for;

/// One normalized block per input record, same order, nothing filtered.
pub fn normalize(raw: &[RawScheduleBlock]) -> Vec<NormalizedScheduleBlock> {
    raw.iter()
        .enumerate()
        .map(|(position, record)| normalize_one(position, record))
        .collect()
}

pub fn normalize_one(position: usize, raw: &RawScheduleBlock) -> NormalizedScheduleBlock {
    let raw_day = aliases::DAY.first_non_empty(raw);
    let day = raw_day.as_deref().and_then(SchoolDay::resolve);

    let start_hour = hour_of(aliases::START_TIME.first_non_empty(raw).as_deref());
    let end_hour = hour_of(aliases::END_TIME.first_non_empty(raw).as_deref());
    // Same-hour and inverted spans still take one row.
    let duration_hours = end_hour.saturating_sub(start_hour).max(1);

    let label = aliases::LABEL
        .resolve(raw)
        .unwrap_or_else(|| DEFAULT_LABEL.to_string());
    let color = color_for(&label);

    NormalizedScheduleBlock {
        position,
        day,
        raw_day,
        start_hour,
        end_hour,
        duration_hours,
        label,
        instructor: aliases::INSTRUCTOR.resolve(raw),
        room: aliases::ROOM.resolve(raw),
        code: aliases::CODE.resolve(raw),
        color,
    }
}
