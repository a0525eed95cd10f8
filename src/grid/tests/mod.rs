
use crate::core::models::RawScheduleBlock;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Record in the English field naming.
pub(super) fn block(day: &str, start: &str, end: &str, label: &str) -> RawScheduleBlock {
    RawScheduleBlock::new()
        .with("day", day)
        .with("startTime", start)
        .with("endTime", end)
        .with("subjectName", label)
}

pub(super) fn temp_log_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("schedgrid-grid-logs-{nanos}-{uniq}"))
}
