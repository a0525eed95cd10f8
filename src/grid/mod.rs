use crate::config::Config;
use crate::core::models::{NormalizedScheduleBlock, RawScheduleBlock};
use crate::core::types::HourWindow;
use crate::logging::{LogTarget, Logger};

pub mod normalizer;
pub mod palette;
pub mod placement;
pub mod selection;
#[cfg(test)]
mod tests;

pub use placement::{CellRenderInstruction, GridSnapshot, LegendEntry, WeeklyGrid};
pub use selection::Selection;

/// Diagnostics hook for grid builds. Implementations must not alter the grid.
pub trait GridObserver {
    /// A block whose day text matched no known day; it is left out of the grid.
    fn block_dropped(&self, _block: &NormalizedScheduleBlock) {}

    fn grid_built(&self, _grid: &WeeklyGrid) {}
}

/// Default observer: dropped blocks stay silent.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;
impl GridObserver for SilentObserver {}

#[derive(Debug, Clone)]
pub struct LoggerObserver {
    logger: Logger,
    report_dropped: bool,
}

impl LoggerObserver {
    pub fn new(logger: Logger, report_dropped: bool) -> Self {
        Self {
            logger,
            report_dropped,
        }
    }
}

impl GridObserver for LoggerObserver {
    fn block_dropped(&self, block: &NormalizedScheduleBlock) {
        if !self.report_dropped {
            return;
        }
        let day = block.raw_day.as_deref().unwrap_or("<missing>");
        self.logger.warn(
            format!(
                "Schedule block #{} ('{}') skipped: unrecognized day '{}'",
                block.position, block.label, day
            ),
            LogTarget::ConsoleAndFile,
        );
    }

    fn grid_built(&self, grid: &WeeklyGrid) {
        self.logger.info(
            format!(
                "Built weekly grid {} with {} block(s), {} placed",
                grid.window(),
                grid.blocks().len(),
                grid.placed_blocks().count()
            ),
            LogTarget::FileOnly,
        );
    }
}

/// Builds [`WeeklyGrid`]s; holds no state between builds.
pub struct GridBuilder {
    window: HourWindow,
    observer: Box<dyn GridObserver>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            window: HourWindow::default(),
            observer: Box::new(SilentObserver),
        }
    }

    /// Window from config, observer logging through `logger`.
    pub fn from_config(config: &Config, logger: &Logger) -> Self {
        Self::new()
            .with_window(*config.hour_window())
            .with_observer(LoggerObserver::new(
                logger.clone(),
                config.report_dropped_blocks(),
            ))
    }

    pub fn with_window(mut self, window: HourWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_observer(mut self, observer: impl GridObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// normalize → report drops → wrap as grid
    pub fn build(&self, raw: &[RawScheduleBlock]) -> WeeklyGrid {
        let blocks = normalizer::normalize(raw);
        for block in blocks.iter().filter(|b| !b.is_placeable()) {
            self.observer.block_dropped(block);
        }
        let grid = WeeklyGrid::new(blocks, self.window);
        self.observer.grid_built(&grid);
        grid
    }
}

/// Grid over the default 07:00-21:00 window with no diagnostics.
pub fn build_grid(raw: &[RawScheduleBlock]) -> WeeklyGrid {
    GridBuilder::new().build(raw)
}
