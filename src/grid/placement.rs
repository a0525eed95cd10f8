use crate::core::models::NormalizedScheduleBlock;
use crate::core::types::{ColorClass, HourWindow, SchoolDay};
use serde::Serialize;
use strum::IntoEnumIterator;

/// What the display layer should draw in one (day, hour) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderInstruction<'a> {
    Empty,
    /// Draw `block` here, spanning `row_span` rows downwards.
    BlockStart {
        block: &'a NormalizedScheduleBlock,
        row_span: usize,
    },
    /// Occupied, but already drawn by a spanning cell above.
    Suppressed,
}

impl CellRenderInstruction<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellRenderInstruction::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: ColorClass,
}

/// Six day columns by `window.rows()` hour rows, derived from normalized blocks.
///
/// Overlaps are not resolved: for any cell the earliest block in input order
/// wins and later blocks are hidden there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyGrid {
    window: HourWindow,
    blocks: Vec<NormalizedScheduleBlock>,
}

impl WeeklyGrid {
    pub fn new(blocks: Vec<NormalizedScheduleBlock>, window: HourWindow) -> Self {
        Self { window, blocks }
    }

    pub fn window(&self) -> HourWindow {
        self.window
    }

    pub fn days(&self) -> impl Iterator<Item = SchoolDay> {
        SchoolDay::iter()
    }

    /// Every normalized block, including the ones with no recognized day.
    pub fn blocks(&self) -> &[NormalizedScheduleBlock] {
        &self.blocks
    }

    pub fn placed_blocks(&self) -> impl Iterator<Item = &NormalizedScheduleBlock> {
        self.blocks.iter().filter(|b| b.is_placeable())
    }

    pub fn dropped_blocks(&self) -> impl Iterator<Item = &NormalizedScheduleBlock> {
        self.blocks.iter().filter(|b| !b.is_placeable())
    }

    pub fn block_at(&self, position: usize) -> Option<&NormalizedScheduleBlock> {
        self.blocks.iter().find(|b| b.position == position)
    }

    /// True when there was no input at all ("no schedule").
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// First block (input order) on `day_index` whose span contains `hour`.
    pub fn cell_content(&self, day_index: usize, hour: i32) -> Option<&NormalizedScheduleBlock> {
        self.blocks.iter().find(|b| b.covers(day_index, hour))
    }

    pub fn is_block_start(block: &NormalizedScheduleBlock, hour: i32) -> bool {
        hour == block.start_hour
    }

    /// Render instruction for one cell. Coordinates outside the grid are `Empty`.
    pub fn cell(&self, day_index: usize, hour: i32) -> CellRenderInstruction<'_> {
        if day_index >= SchoolDay::COUNT || !self.window.contains(hour) {
            return CellRenderInstruction::Empty;
        }
        match self.cell_content(day_index, hour) {
            None => CellRenderInstruction::Empty,
            Some(block) if Self::is_block_start(block, hour) => CellRenderInstruction::BlockStart {
                block,
                row_span: self.row_span(block),
            },
            Some(_) => CellRenderInstruction::Suppressed,
        }
    }

    /// Span clipped at the bottom of the window.
    fn row_span(&self, block: &NormalizedScheduleBlock) -> usize {
        let end = block.end_row().min(self.window.end);
        end.saturating_sub(block.start_hour).max(1) as usize
    }

    /// One column walked top to bottom.
    pub fn column(&self, day_index: usize) -> Vec<CellRenderInstruction<'_>> {
        self.window
            .hours()
            .map(|hour| self.cell(day_index, hour))
            .collect()
    }

    pub fn columns(&self) -> Vec<Vec<CellRenderInstruction<'_>>> {
        (0..SchoolDay::COUNT).map(|day| self.column(day)).collect()
    }

    /// Row-major view: each hour with its six cells, Monday first.
    pub fn rows(&self) -> Vec<(i32, Vec<CellRenderInstruction<'_>>)> {
        self.window
            .hours()
            .map(|hour| {
                let cells = (0..SchoolDay::COUNT)
                    .map(|day| self.cell(day, hour))
                    .collect();
                (hour, cells)
            })
            .collect()
    }

    /// Distinct labels of placed blocks in first-appearance order.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut entries: Vec<LegendEntry> = Vec::new();
        for block in self.placed_blocks() {
            if !entries.iter().any(|e| e.label == block.label) {
                entries.push(LegendEntry {
                    label: block.label.clone(),
                    color: block.color,
                });
            }
        }
        entries
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let columns = self
            .days()
            .map(|day| ColumnSnapshot {
                day,
                cells: self
                    .window
                    .hours()
                    .map(|hour| CellSnapshot::of(hour, self.cell(day.index(), hour)))
                    .collect(),
            })
            .collect();

        GridSnapshot {
            window: self.window,
            empty: self.is_empty(),
            columns,
            legend: self.legend(),
            dropped: self.dropped_blocks().map(|b| b.position).collect(),
        }
    }
}

/// Owned, serializable copy of a grid for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub window: HourWindow,
    pub empty: bool,
    pub columns: Vec<ColumnSnapshot>,
    pub legend: Vec<LegendEntry>,
    pub dropped: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSnapshot {
    pub day: SchoolDay,
    pub cells: Vec<CellSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellSnapshot {
    Empty {
        hour: i32,
    },
    BlockStart {
        hour: i32,
        row_span: usize,
        block: NormalizedScheduleBlock,
    },
    Suppressed {
        hour: i32,
    },
}

impl CellSnapshot {
    fn of(hour: i32, cell: CellRenderInstruction<'_>) -> Self {
        match cell {
            CellRenderInstruction::Empty => CellSnapshot::Empty { hour },
            CellRenderInstruction::BlockStart { block, row_span } => CellSnapshot::BlockStart {
                hour,
                row_span,
                block: block.clone(),
            },
            CellRenderInstruction::Suppressed => CellSnapshot::Suppressed { hour },
        }
    }
}
