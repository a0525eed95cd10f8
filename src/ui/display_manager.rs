use crate::config::Config;
use crate::grid::{Selection, WeeklyGrid};
use crate::ui::display_data::GridDisplayData;
use crate::ui::table_printer::{Table, TablePrinter};
use std::io::{self, Write};

pub const NO_SCHEDULE: &str = "No schedule available.";
const NO_LEGEND: &str = "No blocks placed on the grid.";

/// Composes the weekly grid, its legend and the selected block into tables.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub data: GridDisplayData,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: GridDisplayData) -> Self {
        self.data = data;
        self
    }

    /// Cell width that keeps seven columns inside `terminal_width`.
    pub fn cell_width_for(terminal_width: usize) -> usize {
        let hour_col = "00:00-00:00".len();
        let separators = 6 * 3;
        (terminal_width.saturating_sub(hour_col + separators) / 6).max(8)
    }

    pub fn render_grid<W: Write + ?Sized>(
        &self,
        grid: &WeeklyGrid,
        selection: &Selection<'_>,
        out: &mut W,
    ) -> io::Result<()> {
        let header_cells = GridDisplayData::grid_headers();
        let headers: Vec<&str> = header_cells.iter().map(String::as_str).collect();

        if grid.is_empty() {
            let none: Vec<Vec<String>> = Vec::new();
            let table = Table::new("Weekly schedule", &headers, &none).empty_message(NO_SCHEDULE);
            return self.printer.render(&table, out);
        }

        let rows = self.data.grid_rows(grid, selection);
        let grid_table = Table::new("Weekly schedule", &headers, &rows);
        self.printer.render(&grid_table, out)?;

        let legend = self.data.legend_rows(grid);
        let legend_table = Table::new("Legend", &["SUBJECT", "COLOR"], &legend)
            .empty_message(NO_LEGEND);
        self.printer.render(&legend_table, out)?;

        if let Some(block) = selection.selected_block(grid) {
            let details = self.data.detail_rows(block);
            self.printer
                .render(&Table::new("Selected block", &[], &details), out)?;
        }
        Ok(())
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let rows: Vec<Vec<String>> = config
            .rows()
            .iter()
            .map(|(k, d, v)| vec![k.clone(), d.clone(), v.clone()])
            .collect();
        let table = Table::new("Config", &["KEY", "DESCRIPTION", "VALUE"], &rows)
            .empty_message("No config items found.");
        self.printer.render(&table, out)
    }
}
