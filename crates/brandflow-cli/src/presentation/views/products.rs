use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::text::truncate;
use crate::presentation::view_models::{
    CellViewModel, ExportResultViewModel, ProductTableViewModel, ViewMode,
};

// --------------------------------------------------------
// Product Table View
// --------------------------------------------------------

const NAME_WIDTH: usize = 40;
const CELL_WIDTH: usize = 14;

pub struct ProductTableView<'a> {
    data: &'a ProductTableViewModel,
    mode: ViewMode,
}

impl<'a> ProductTableView<'a> {
    pub fn new(data: &'a ProductTableViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(f, "{}", row.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            let name = row.cells.first().map_or("", |c| c.display.as_str());
            let tags: Vec<&str> = row.tags.iter().map(|t| t.name.as_str()).collect();
            write!(
                f,
                "{:>3}  {} {:>3}  {}",
                row.id,
                self.data.score_label,
                row.score,
                truncate(name, NAME_WIDTH)
            )?;
            if !tags.is_empty() {
                write!(f, "  [{}]", tags.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, detailed: bool) -> fmt::Result {
        if let Some(sort) = &self.data.sort {
            writeln!(f, "Sorted by {}", sort)?;
        }
        if let Some(preset) = &self.data.preset {
            writeln!(f, "Preset: {}", preset)?;
        }

        let mut header = format!("{:>3}  ", "ID");
        for (idx, title) in self.data.headers.iter().enumerate() {
            header.push_str(&cell_text(idx, title));
        }
        writeln!(f, "{}", header.trim_end().bold())?;

        for row in &self.data.rows {
            let mut line = format!("{:>3}  ", row.id);
            for (idx, cell) in row.cells.iter().enumerate() {
                line.push_str(&cell_text(idx, &cell.display));
            }
            writeln!(f, "{}", line.trim_end())?;

            if detailed {
                self.render_details(f, &row.cells)?;
                if !row.tags.is_empty() {
                    let tags: Vec<&str> = row.tags.iter().map(|t| t.name.as_str()).collect();
                    writeln!(f, "       tags: {}", tags.join(", "))?;
                }
            }
        }

        if self.data.selected_count > 0 {
            writeln!(f, "\n{} selected", self.data.selected_count)?;
        }
        Ok(())
    }

    fn render_details(&self, f: &mut fmt::Formatter, cells: &[CellViewModel]) -> fmt::Result {
        for cell in cells {
            let (Some(previous), Some(change), Some(up)) =
                (&cell.previous, &cell.change, cell.is_positive)
            else {
                continue;
            };
            let arrow = if up { "▲" } else { "▼" };
            write!(
                f,
                "       {:<22} {} {} (was {})",
                cell.column_id, arrow, change, previous
            )?;
            if let (Some(seller), Some(vendor)) = (&cell.seller, &cell.vendor) {
                write!(f, "  seller {} / vendor {}", seller, vendor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ProductTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            return writeln!(f, "No products.");
        }
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

/// First column holds the product name, the rest are fixed width
fn cell_text(idx: usize, text: &str) -> String {
    if idx == 0 {
        format!("{:<w$}  ", truncate(text, NAME_WIDTH), w = NAME_WIDTH)
    } else {
        format!("{:>w$}  ", truncate(text, CELL_WIDTH), w = CELL_WIDTH)
    }
}

// --------------------------------------------------------
// Export Result View
// --------------------------------------------------------

pub struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
}

impl<'a> ExportResultView<'a> {
    pub fn new(data: &'a ExportResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Exported {} products ({} columns) to {}",
            self.data.rows, self.data.columns, self.data.path
        )
    }
}
