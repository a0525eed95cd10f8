use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// A titled table: header row, body rows and an optional empty-state message.
#[derive(Debug, Clone)]
pub struct Table<'a, T: AsRef<str>> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<T>],
    pub empty_message: Option<&'a str>,
    pub min_width: usize,
}

impl<'a, T: AsRef<str>> Table<'a, T> {
    pub fn new(title: &'a str, headers: &'a [&'a str], rows: &'a [Vec<T>]) -> Self {
        Self {
            title,
            headers,
            rows,
            empty_message: None,
            min_width: 0,
        }
    }

    pub fn empty_message(mut self, msg: &'a str) -> Self {
        self.empty_message = Some(msg);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_separator(out, w)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.write_separator(out, w)
    }

    pub fn table_width<T: AsRef<str>>(&self, table: &Table<'_, T>) -> usize {
        let natural = Self::natural_width(&self.col_widths(table.headers, table.rows));
        natural.max(table.min_width)
    }

    pub fn render<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table: &Table<'_, T>,
        out: &mut W,
    ) -> io::Result<()> {
        let col_widths = self.col_widths(table.headers, table.rows);
        let total_width = Self::natural_width(&col_widths)
            .max(table.min_width)
            .max(self.util.visible_width(table.title));

        if table.rows.is_empty() {
            if let Some(msg) = table.empty_message {
                let width = total_width.max(self.util.visible_width(msg));
                self.render_banner(table.title, width, out)?;
                writeln!(out, "{msg}")?;
                return self.write_separator(out, width);
            }
        }

        self.render_banner(table.title, total_width, out)?;
        if !table.headers.is_empty() {
            writeln!(out, "{}", self.join_padded(table.headers, &col_widths))?;
            self.write_separator(out, total_width)?;
        }
        for row in table.rows {
            writeln!(out, "{}", self.join_padded(row, &col_widths))?;
        }
        self.write_separator(out, total_width)
    }

    fn col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        // Headerless tables take their column count from the widest row.
        let cols = if headers.is_empty() {
            rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            headers.len()
        };
        let mut widths = vec![0usize; cols];
        for (i, h) in headers.iter().enumerate() {
            widths[i] = self.util.visible_width(h);
        }
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(cols) {
                widths[i] = widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn natural_width(col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().sum::<usize>() + (col_widths.len() - 1) * 3
        }
    }

    fn join_padded<T: AsRef<str>>(&self, cells: &[T], col_widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(col_widths)
            .map(|(cell, width)| self.util.pad_visible(cell.as_ref(), *width))
            .collect::<Vec<_>>()
            .join(" | ");
        line.trim_end().to_string()
    }
}
