use crate::core::models::NormalizedScheduleBlock;
use crate::core::types::{HourWindow, SchoolDay};
use crate::grid::{CellRenderInstruction, Selection, WeeklyGrid};
use crate::ui::ansi::{STYLE_BOLD, STYLE_RESET};
use crate::ui::width_util::WidthUtil;
use strum::IntoEnumIterator;

/// Marker for a cell already covered by a block drawn above it.
pub const CONTINUATION: &str = "⋮";
/// Prefix of the selected block's start cell.
pub const SELECTED_MARK: &str = "*";

/// Turns a [`WeeklyGrid`] into plain string rows for the table printer.
#[derive(Debug, Clone)]
pub struct GridDisplayData {
    util: WidthUtil,
    paint: bool,
    max_cell_width: Option<usize>,
}

impl Default for GridDisplayData {
    fn default() -> Self {
        Self {
            util: WidthUtil,
            paint: true,
            max_cell_width: None,
        }
    }
}

impl GridDisplayData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paint(mut self, paint: bool) -> Self {
        self.paint = paint;
        self
    }

    pub fn with_max_cell_width(mut self, width: Option<usize>) -> Self {
        self.max_cell_width = width;
        self
    }

    pub fn grid_headers() -> Vec<String> {
        std::iter::once("HOUR".to_string())
            .chain(SchoolDay::iter().map(|d| d.to_string().to_uppercase()))
            .collect()
    }

    pub fn grid_rows(&self, grid: &WeeklyGrid, selection: &Selection<'_>) -> Vec<Vec<String>> {
        grid.rows()
            .into_iter()
            .map(|(hour, cells)| {
                std::iter::once(HourWindow::slot_label(hour))
                    .chain(cells.iter().map(|cell| self.cell_text(cell, selection)))
                    .collect()
            })
            .collect()
    }

    fn cell_text(&self, cell: &CellRenderInstruction<'_>, selection: &Selection<'_>) -> String {
        match cell {
            CellRenderInstruction::Empty => String::new(),
            CellRenderInstruction::Suppressed => CONTINUATION.to_string(),
            CellRenderInstruction::BlockStart { block, row_span } => {
                let selected = selection.is_selected(block);
                let mut text = if *row_span > 1 {
                    format!("{} ({}h)", block.label, row_span)
                } else {
                    block.label.clone()
                };
                if selected {
                    text.insert_str(0, SELECTED_MARK);
                }
                if let Some(width) = self.max_cell_width {
                    text = self.util.truncate(&text, width);
                }
                match (self.paint, selected) {
                    (true, true) => format!("{STYLE_BOLD}{}{STYLE_RESET}", block.color.paint(text)),
                    (true, false) => block.color.paint(text),
                    (false, _) => text,
                }
            }
        }
    }

    pub fn legend_rows(&self, grid: &WeeklyGrid) -> Vec<Vec<String>> {
        grid.legend()
            .into_iter()
            .map(|entry| {
                let label = if self.paint {
                    entry.color.paint(&entry.label)
                } else {
                    entry.label.clone()
                };
                vec![label, entry.color.to_string()]
            })
            .collect()
    }

    pub fn detail_rows(&self, block: &NormalizedScheduleBlock) -> Vec<Vec<String>> {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        let day = block
            .day
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        vec![
            vec!["Subject".into(), block.label.clone()],
            vec!["Code".into(), or_dash(&block.code)],
            vec!["Instructor".into(), or_dash(&block.instructor)],
            vec!["Room".into(), or_dash(&block.room)],
            vec!["Day".into(), day],
            vec![
                "Time".into(),
                format!("{:02}:00-{:02}:00", block.start_hour, block.end_row()),
            ],
        ]
    }
}
